//! CLI module: command handlers, data loading, and output utilities

mod commands;
mod data;
mod logging;

pub use commands::{run_command, Cli};
pub use data::load_labels;
pub use logging::LogLevel;
