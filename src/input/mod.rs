//! Input adapters that feed the interactive driver.

pub mod gui;
