//! Terminal User Interface module
//!
//! Presents the wizard as three full screens using ratatui, with message
//! boxes and the save prompt drawn as dialogs on top.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
