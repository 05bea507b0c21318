mod command_runner;

pub use command_runner::{CommandCapture, CommandError, run_captured};
