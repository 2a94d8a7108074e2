use crate::controllers::interactive::{DriverInput, InputSource};
use crate::core::data::point::Point;
use std::collections::VecDeque;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};

const ITERATION_STEP: i32 = 50;

/// Collects window events between frames. Only the newest cursor position is
/// kept, key commands queue up in order and quitting wins over everything.
///
/// Keys: `P` cycles the palette, Up/Down raise or lower the iteration cap,
/// Escape quits.
#[derive(Debug)]
pub struct WindowInput {
    scale_factor: f64,
    cursor: Option<Point>,
    commands: VecDeque<DriverInput>,
    quit: bool,
}

impl WindowInput {
    #[must_use]
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
            commands: VecDeque::new(),
            quit: false,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit = true,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(logical_key),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(to_grid_point(*position, self.scale_factor));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key_command(key) {
            Some(DriverInput::Quit) => self.quit = true,
            Some(command) => self.commands.push_back(command),
            None => {}
        }
    }
}

fn key_command(key: &Key) -> Option<DriverInput> {
    match key {
        Key::Named(NamedKey::Escape) => Some(DriverInput::Quit),
        Key::Named(NamedKey::ArrowUp) => Some(DriverInput::AdjustMaxIterations(ITERATION_STEP)),
        Key::Named(NamedKey::ArrowDown) => Some(DriverInput::AdjustMaxIterations(-ITERATION_STEP)),
        Key::Character(text) if text.eq_ignore_ascii_case("p") => Some(DriverInput::NextPalette),
        _ => None,
    }
}

impl InputSource for WindowInput {
    fn poll(&mut self) -> Option<DriverInput> {
        if self.quit {
            return Some(DriverInput::Quit);
        }

        self.commands
            .pop_front()
            .or_else(|| self.cursor.take().map(DriverInput::Cursor))
    }
}

/// Window positions arrive in physical pixels; the grid is laid out in
/// logical ones.
fn to_grid_point(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f64>(scale_factor);

    Point {
        x: logical.x.floor() as i32,
        y: logical.y.floor() as i32,
    }
}
