//! Dialog modules for the TUI
//!
//! Modal message boxes and the save prompt

pub mod notice;
pub mod save;
