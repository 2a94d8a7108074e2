mod controller;

pub use controller::{BatchController, BatchError, DEFAULT_BATCH_CONSTANTS, batch_file_name};
