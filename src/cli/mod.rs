//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the wizard steps.

pub mod summary;

pub use summary::{handle_categories_command, handle_summary_command, SummaryArgs};
