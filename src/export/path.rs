//! Resolution of the path typed at the save prompt

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// File name offered by default at the save prompt
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("budget-{}.csv", date.format("%Y-%m-%d"))
}

/// Append `.csv` when the path names a file without an extension
///
/// Paths ending in a separator, or without a file name at all, are returned
/// unchanged so that writing to them fails instead of creating a sibling file.
pub fn ensure_csv_extension(path: PathBuf) -> PathBuf {
    let names_directory = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);

    let Some(file_name) = path.file_name() else {
        return path;
    };

    if names_directory
        || path.extension().is_some()
        || file_name.to_string_lossy().eq_ignore_ascii_case(".csv")
    {
        path
    } else {
        path.with_extension("csv")
    }
}

/// Turn prompt input into an export path
///
/// Blank input means the prompt was cancelled. Relative paths are placed in
/// `default_dir` when one is configured.
pub fn resolve_export_path(input: &str, default_dir: Option<&Path>) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let path = PathBuf::from(trimmed);
    let path = match default_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    };

    Some(ensure_csv_extension(path))
}
