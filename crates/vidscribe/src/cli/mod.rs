//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vidscribe binary.

mod commands;
mod generate;
mod tui_handler;

pub use commands::{Cli, Commands, OutputFormat};
pub use generate::run_generate;
pub use tui_handler::launch_tui;
