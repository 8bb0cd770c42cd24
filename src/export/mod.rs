//! Export module for the budget wizard
//!
//! Writes the expense list to a comma-delimited file and resolves the path
//! the user typed at the save prompt.

pub mod csv;
pub mod path;

pub use self::csv::{export_expenses, save_expenses_csv, write_expenses_csv, ExportOutcome, EXPORT_HEADER};
pub use self::path::{default_export_file_name, ensure_csv_extension, resolve_export_path};
