//! Initialization of the logger and the two analytics channels.

mod channels;
mod logger;

pub use channels::{init_measurement_channel, init_project_channel};
pub use logger::init_logger_with;
