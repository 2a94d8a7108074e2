//! Interactive exploration: the cursor picks the Julia constant, every change
//! is sampled, colourised and handed to a frame presenter at a capped rate.
//!
//! The driver is strictly serial. A frame is rendered to completion before
//! the next input is read, so there is nothing to cancel.

mod app_context;
mod cursor;
mod driver;
mod fps_counter;
mod frame_limiter;
mod overlay;
pub mod ports;

pub use app_context::AppContext;
pub use cursor::cursor_to_constant;
pub use driver::{DriverError, DriverEvent, DriverState, InteractiveDriver, StepOutcome};
pub use fps_counter::FpsCounter;
pub use frame_limiter::FrameLimiter;
pub use overlay::Overlay;
pub use ports::{DriverInput, FramePresenterPort, InputSource};
