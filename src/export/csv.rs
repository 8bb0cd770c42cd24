//! CSV export of the expense list
//!
//! Writes a `Category,Amount` header and one row per expense in list order.
//! Amounts are written raw (`800.0`), not in display form.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseList;

/// Header row of every export file
pub const EXPORT_HEADER: [&str; 2] = ["Category", "Amount"];

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written
    Saved { path: PathBuf, rows: usize },
    /// No path was chosen, nothing was written
    Cancelled,
}

/// Write the expense list as CSV to any writer
pub fn write_expenses_csv<W: Write>(expenses: &ExpenseList, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| BudgetError::Write(e.to_string()))?;

    for entry in expenses {
        let amount = entry.amount().to_raw_string();
        csv_writer
            .write_record([entry.category().as_str(), amount.as_str()])
            .map_err(|e| BudgetError::Write(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Write(e.to_string()))?;

    Ok(())
}

/// Create (or truncate) `path` and write the expense list into it
pub fn save_expenses_csv(path: &Path, expenses: &ExpenseList) -> BudgetResult<()> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Write(format!("Could not save to {}: {}", path.display(), e))
    })?;

    write_expenses_csv(expenses, file)
}

/// Export to the chosen path, or do nothing if no path was chosen
pub fn export_expenses(path: Option<&Path>, expenses: &ExpenseList) -> BudgetResult<ExportOutcome> {
    let Some(path) = path else {
        return Ok(ExportOutcome::Cancelled);
    };

    save_expenses_csv(path, expenses)?;

    Ok(ExportOutcome::Saved {
        path: path.to_path_buf(),
        rows: expenses.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseEntry};
    use tempfile::TempDir;

    fn sample_expenses() -> ExpenseList {
        let mut expenses = ExpenseList::new();
        expenses.push(ExpenseEntry::parse(ExpenseCategory::Rent, "800").unwrap());
        expenses.push(ExpenseEntry::parse(ExpenseCategory::Utilities, "200").unwrap());
        expenses
    }

    #[test]
    fn test_write_expenses_csv() {
        let mut output = Vec::new();
        write_expenses_csv(&sample_expenses(), &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string, "Category,Amount\nRent,800.0\nUtilities,200.0\n");
    }

    #[test]
    fn test_raw_amounts_and_slash_category() {
        let mut expenses = ExpenseList::new();
        expenses.push(ExpenseEntry::parse(ExpenseCategory::FoodDrink, "12.345").unwrap());
        expenses.push(ExpenseEntry::parse(ExpenseCategory::Other, "1500").unwrap());

        let mut output = Vec::new();
        write_expenses_csv(&expenses, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string, "Category,Amount\nFood/Drink,12.345\nOther,1500.0\n");
        assert!(!csv_string.contains('$'));
    }

    #[test]
    fn test_empty_list_writes_header_only() {
        let mut output = Vec::new();
        write_expenses_csv(&ExpenseList::new(), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Category,Amount\n");
    }

    #[test]
    fn test_save_row_count_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.csv");
        let expenses = sample_expenses();

        save_expenses_csv(&path, &expenses).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["Category", "Amount"]);

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(rows.len(), expenses.len());
        assert_eq!(rows[0], vec!["Rent", "800.0"]);
        assert_eq!(rows[1], vec!["Utilities", "200.0"]);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.csv");
        std::fs::write(&path, "stale contents that are longer than the export\n").unwrap();

        save_expenses_csv(&path, &sample_expenses()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Category,Amount\n"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("budget.csv");

        let err = save_expenses_csv(&path, &sample_expenses()).unwrap_err();
        assert!(matches!(err, BudgetError::Write(_)));
        assert!(err.user_message().contains("budget.csv"));
    }

    #[test]
    fn test_cancelled_export_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let outcome = export_expenses(None, &sample_expenses()).unwrap();

        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_reports_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let outcome = export_expenses(Some(path.as_path()), &sample_expenses()).unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                path: path.clone(),
                rows: 2
            }
        );
        assert!(path.exists());
    }
}
