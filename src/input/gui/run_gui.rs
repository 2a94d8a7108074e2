use crate::config::fractal_config::FractalConfig;
use crate::controllers::interactive::{
    AppContext, DriverError, InputSource, InteractiveDriver, StepOutcome,
};
use crate::core::colour::errors::PaletteError;
use crate::input::gui::window_input::WindowInput;
use crate::presenters::pixels::PixelsPresenter;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{error, info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Pixels(pixels::Error),
    Palette(PaletteError),
    Driver(DriverError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "failed to create pixels surface: {}", err),
            Self::Palette(err) => write!(f, "{}", err),
            Self::Driver(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Driver(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<PaletteError> for GuiError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<DriverError> for GuiError {
    fn from(err: DriverError) -> Self {
        Self::Driver(err)
    }
}

/// Opens a window of the grid's size and explores Julia constants under the
/// cursor until the window is closed or Escape is pressed.
pub fn run_gui(config: FractalConfig, frame_rate: NonZeroU32) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Julia Explorer")
            .with_inner_size(LogicalSize::new(
                config.grid.width() as f64,
                config.grid.height() as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, &event_loop, config.grid)?;
    let context = AppContext::new(config)?;
    let mut driver = InteractiveDriver::new(context, presenter, frame_rate);
    let mut input = WindowInput::new(window.scale_factor());
    let mut failure: Option<DriverError> = None;

    info!(
        width = config.grid.width(),
        height = config.grid.height(),
        frame_rate = frame_rate.get(),
        "window opened"
    );

    driver.refresh()?;
    driver.limiter_mut().finish_frame(Instant::now());

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => {
            driver.presenter_mut().handle_window_event(&event);
            input.handle_window_event(&event);

            match event {
                WindowEvent::Resized(size) => {
                    if let Err(err) = driver
                        .presenter_mut()
                        .resize_surface(size.width, size.height)
                    {
                        warn!(%err, "failed to resize surface");
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = driver.presenter_mut().render() {
                        warn!(%err, "redraw failed");
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();

            if driver.limiter().remaining(now).is_zero() {
                match driver.step(input.poll(), now) {
                    Ok(StepOutcome::Stopped) => elwt.exit(),
                    Ok(_) => {}
                    Err(err) => {
                        error!(%err, "frame failed");
                        failure = Some(err);
                        elwt.exit();
                    }
                }

                driver.limiter_mut().finish_frame(now);
            }

            if let Some(deadline) = driver.limiter().next_deadline() {
                elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
        }
        _ => {}
    })?;

    info!(frames = driver.frames_presented(), "window closed");

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
