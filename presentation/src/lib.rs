//! Presentation layer for knobset
//!
//! This crate contains CLI definitions and output formatters for
//! knob trees.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OptionsFormatter;
