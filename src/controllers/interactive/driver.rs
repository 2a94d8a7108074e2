use crate::controllers::interactive::app_context::AppContext;
use crate::controllers::interactive::fps_counter::FpsCounter;
use crate::controllers::interactive::frame_limiter::FrameLimiter;
use crate::controllers::interactive::overlay::Overlay;
use crate::controllers::interactive::ports::{DriverInput, FramePresenterPort, InputSource};
use crate::config::settings::SettingsError;
use crate::controllers::render::RenderError;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Nothing changed since the last presented frame.
    Idle,
    Recomputing,
    Presenting,
    /// Quit was requested, no further frames are produced.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    CursorMoved,
    Unchanged,
    FrameReady,
    Presented,
    Quit,
}

impl DriverState {
    #[must_use]
    pub fn next(self, event: DriverEvent) -> Self {
        match (self, event) {
            (Self::Stopped, _) | (_, DriverEvent::Quit) => Self::Stopped,
            (Self::Idle, DriverEvent::CursorMoved) => Self::Recomputing,
            (Self::Recomputing, DriverEvent::FrameReady) => Self::Presenting,
            (Self::Presenting, DriverEvent::Presented) => Self::Idle,
            (state, _) => state,
        }
    }
}

/// What a single [`InteractiveDriver::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Presented,
    Unchanged,
    Stopped,
}

#[derive(Debug)]
pub enum DriverError {
    Render(RenderError),
    Present(Box<dyn Error + Send + Sync>),
    Settings(SettingsError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Present(err) => write!(f, "present error: {}", err),
            Self::Settings(err) => write!(f, "settings error: {}", err),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err.as_ref()),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<RenderError> for DriverError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<SettingsError> for DriverError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

pub struct InteractiveDriver<P: FramePresenterPort> {
    context: AppContext,
    presenter: P,
    state: DriverState,
    last_cursor: Option<Point>,
    fps: FpsCounter,
    limiter: FrameLimiter,
    frames_presented: u64,
}

impl<P: FramePresenterPort> InteractiveDriver<P> {
    pub fn new(context: AppContext, presenter: P, frame_rate: NonZeroU32) -> Self {
        Self {
            context,
            presenter,
            state: DriverState::Idle,
            last_cursor: None,
            fps: FpsCounter::default(),
            limiter: FrameLimiter::new(frame_rate),
            frames_presented: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Tears the driver down and hands back the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    #[must_use]
    pub fn limiter(&self) -> &FrameLimiter {
        &self.limiter
    }

    pub fn limiter_mut(&mut self) -> &mut FrameLimiter {
        &mut self.limiter
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Renders and presents the current constant whether or not the cursor
    /// moved, e.g. for the first frame or after a settings change.
    pub fn refresh(&mut self) -> Result<(), DriverError> {
        if self.state == DriverState::Stopped {
            return Ok(());
        }

        self.state = self.state.next(DriverEvent::CursorMoved);
        self.recompute_and_present()
    }

    /// Handles one frame's worth of input. Cursor positions are compared at
    /// whole-pixel granularity, a repeated position does not recompute.
    pub fn step(&mut self, input: Option<DriverInput>, now: Instant) -> Result<StepOutcome, DriverError> {
        if self.state == DriverState::Stopped {
            return Ok(StepOutcome::Stopped);
        }

        self.fps.tick(now);

        match input {
            Some(DriverInput::Quit) => {
                self.state = self.state.next(DriverEvent::Quit);
                info!(frames = self.frames_presented, "quit requested");
                Ok(StepOutcome::Stopped)
            }
            Some(DriverInput::Cursor(cursor)) if self.last_cursor != Some(cursor) => {
                self.last_cursor = Some(cursor);

                let c = self.context.cursor_to_constant(cursor);
                self.context.set_constant(c);
                trace!(x = cursor.x, y = cursor.y, %c, "cursor moved");

                self.state = self.state.next(DriverEvent::CursorMoved);
                self.recompute_and_present()?;

                Ok(StepOutcome::Presented)
            }
            Some(DriverInput::NextPalette) => {
                let name = self.context.config().palette.next();
                self.context.set_palette(name).map_err(SettingsError::from)?;
                info!(palette = %name, "palette changed");

                self.refresh()?;
                Ok(StepOutcome::Presented)
            }
            Some(DriverInput::AdjustMaxIterations(delta)) => {
                let current = self.context.config().params.max_iterations();
                let max_iterations = current.saturating_add_signed(delta).max(1);

                if max_iterations == current {
                    self.state = self.state.next(DriverEvent::Unchanged);
                    return Ok(StepOutcome::Unchanged);
                }

                self.context.set_max_iterations(max_iterations)?;
                info!(max_iterations, "iteration cap changed");

                self.refresh()?;
                Ok(StepOutcome::Presented)
            }
            _ => {
                self.state = self.state.next(DriverEvent::Unchanged);
                Ok(StepOutcome::Unchanged)
            }
        }
    }

    /// Presents the initial frame, then steps once per frame budget until the
    /// input source asks to quit.
    pub fn run<I: InputSource>(&mut self, input: &mut I) -> Result<(), DriverError> {
        self.refresh()?;
        self.limiter.finish_frame(Instant::now());

        loop {
            if self.step(input.poll(), Instant::now())? == StepOutcome::Stopped {
                break;
            }

            self.limiter.wait();
        }

        info!(frames = self.frames_presented, "interactive session ended");

        Ok(())
    }

    fn recompute_and_present(&mut self) -> Result<(), DriverError> {
        let start = Instant::now();

        let buffer = match self.context.render() {
            Ok(buffer) => buffer,
            Err(err) => {
                self.state = DriverState::Idle;
                return Err(err.into());
            }
        };

        self.state = self.state.next(DriverEvent::FrameReady);

        let overlay = Overlay {
            fps: self.fps.fps(),
            constant: self.context.constant(),
        };

        let presented = self.presenter.present(&buffer, &overlay);
        self.state = self.state.next(DriverEvent::Presented);
        presented.map_err(DriverError::Present)?;

        self.frames_presented += 1;
        debug!(elapsed = ?start.elapsed(), c = %overlay.constant, "frame presented");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::core::colour::palette_name::PaletteName;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<(PixelBuffer, Overlay)>,
    }

    impl FramePresenterPort for RecordingPresenter {
        fn present(&mut self, buffer: &PixelBuffer, overlay: &Overlay) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.frames.push((buffer.clone(), *overlay));
            Ok(())
        }
    }

    struct FailingPresenter;

    impl FramePresenterPort for FailingPresenter {
        fn present(&mut self, _: &PixelBuffer, _: &Overlay) -> Result<(), Box<dyn Error + Send + Sync>> {
            Err("surface lost".into())
        }
    }

    struct ScriptedInput(VecDeque<Option<DriverInput>>);

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Option<DriverInput> {
            self.0.pop_front().unwrap_or(Some(DriverInput::Quit))
        }
    }

    fn context() -> AppContext {
        let config = Settings {
            width: 40,
            height: 40,
            max_iterations: 30,
            ..Settings::default()
        }
        .validate()
        .unwrap();

        AppContext::new(config).unwrap()
    }

    fn driver<P: FramePresenterPort>(presenter: P) -> InteractiveDriver<P> {
        InteractiveDriver::new(context(), presenter, NonZeroU32::new(1000).unwrap())
    }

    fn cursor(x: i32, y: i32) -> Option<DriverInput> {
        Some(DriverInput::Cursor(Point { x, y }))
    }

    #[test]
    fn transitions_follow_the_cycle() {
        let state = DriverState::Idle;

        assert_eq!(state.next(DriverEvent::Unchanged), DriverState::Idle);
        assert_eq!(state.next(DriverEvent::CursorMoved), DriverState::Recomputing);
        assert_eq!(
            DriverState::Recomputing.next(DriverEvent::FrameReady),
            DriverState::Presenting
        );
        assert_eq!(DriverState::Presenting.next(DriverEvent::Presented), DriverState::Idle);
    }

    #[test]
    fn quit_is_terminal() {
        for state in [
            DriverState::Idle,
            DriverState::Recomputing,
            DriverState::Presenting,
        ] {
            assert_eq!(state.next(DriverEvent::Quit), DriverState::Stopped);
        }
        assert_eq!(
            DriverState::Stopped.next(DriverEvent::CursorMoved),
            DriverState::Stopped
        );
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        assert_eq!(DriverState::Idle.next(DriverEvent::Presented), DriverState::Idle);
        assert_eq!(
            DriverState::Recomputing.next(DriverEvent::CursorMoved),
            DriverState::Recomputing
        );
    }

    #[test]
    fn cursor_move_presents_a_frame_with_mapped_constant() {
        let mut driver = driver(RecordingPresenter::default());

        let outcome = driver.step(cursor(10, 30), Instant::now()).unwrap();

        assert_eq!(outcome, StepOutcome::Presented);
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.frames_presented(), 1);

        let (buffer, overlay) = &driver.presenter().frames[0];
        assert_eq!(buffer.width(), 40);
        assert_eq!(overlay.constant, Complex::new(-0.5, -0.5));
    }

    #[test]
    fn repeated_position_does_not_recompute() {
        let mut driver = driver(RecordingPresenter::default());
        let now = Instant::now();

        driver.step(cursor(5, 5), now).unwrap();
        let outcome = driver.step(cursor(5, 5), now).unwrap();
        driver.step(None, now).unwrap();

        assert_eq!(outcome, StepOutcome::Unchanged);
        assert_eq!(driver.presenter().frames.len(), 1);
    }

    #[test]
    fn quit_stops_further_frames() {
        let mut driver = driver(RecordingPresenter::default());
        let now = Instant::now();

        assert_eq!(
            driver.step(Some(DriverInput::Quit), now).unwrap(),
            StepOutcome::Stopped
        );
        assert_eq!(driver.step(cursor(1, 1), now).unwrap(), StepOutcome::Stopped);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.into_presenter().frames.is_empty());
    }

    #[test]
    fn run_presents_initial_frame_and_each_move() {
        let mut driver = driver(RecordingPresenter::default());
        let mut input = ScriptedInput(VecDeque::from([
            cursor(0, 0),
            None,
            cursor(0, 0),
            cursor(20, 20),
            Some(DriverInput::Quit),
        ]));

        driver.run(&mut input).unwrap();

        let constants: Vec<Complex> = driver
            .presenter()
            .frames
            .iter()
            .map(|(_, overlay)| overlay.constant)
            .collect();

        assert_eq!(
            constants,
            vec![
                Complex::new(0.3341, 0.3966),
                Complex::new(-1.0, 1.0),
                Complex::new(0.0, 0.0),
            ]
        );
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn run_respects_frame_cap() {
        let mut driver =
            InteractiveDriver::new(context(), RecordingPresenter::default(), NonZeroU32::new(100).unwrap());
        let mut input = ScriptedInput((0..5).map(|_| None).collect());
        let start = Instant::now();

        driver.run(&mut input).unwrap();

        // five idle frames, each followed by a full 10ms budget
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn present_failure_is_reported_and_driver_stays_usable() {
        let mut driver = driver(FailingPresenter);

        let err = driver.step(cursor(3, 3), Instant::now()).unwrap_err();

        assert!(matches!(err, DriverError::Present(_)));
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.frames_presented(), 0);
        assert_eq!(err.source().map(|source| source.to_string()).as_deref(), Some("surface lost"));
    }

    #[test]
    fn next_palette_rebuilds_and_redraws() {
        let mut driver = driver(RecordingPresenter::default());
        let now = Instant::now();
        driver.step(cursor(10, 30), now).unwrap();

        let outcome = driver.step(Some(DriverInput::NextPalette), now).unwrap();

        assert_eq!(outcome, StepOutcome::Presented);
        assert_eq!(driver.context().palette().name(), PaletteName::Twilight);
        assert_eq!(driver.context().palette().len(), 30);
        assert_eq!(driver.presenter().frames.len(), 2);

        let frames = &driver.presenter().frames;
        assert_eq!(frames[1].1.constant, frames[0].1.constant);
        assert_ne!(frames[1].0, frames[0].0);
    }

    #[test]
    fn adjusting_max_iterations_resizes_palette() {
        let mut driver = driver(RecordingPresenter::default());
        let now = Instant::now();

        let raised = driver.step(Some(DriverInput::AdjustMaxIterations(20)), now).unwrap();

        assert_eq!(raised, StepOutcome::Presented);
        assert_eq!(driver.context().config().params.max_iterations(), 50);
        assert_eq!(driver.context().palette().len(), 50);

        driver.step(Some(DriverInput::AdjustMaxIterations(-1000)), now).unwrap();

        assert_eq!(driver.context().config().params.max_iterations(), 1);
        assert_eq!(driver.context().palette().len(), 1);
        assert_eq!(
            driver.step(Some(DriverInput::AdjustMaxIterations(-5)), now).unwrap(),
            StepOutcome::Unchanged
        );
        assert_eq!(driver.presenter().frames.len(), 2);
    }
}
