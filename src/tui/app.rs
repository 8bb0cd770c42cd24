//! Application state for the TUI
//!
//! The App struct holds the active wizard step plus the dialog state layered
//! on top of it. Every user action maps to one method here.

use chrono::Local;
use tracing::info;

use crate::config::Settings;
use crate::error::BudgetError;
use crate::export::{default_export_file_name, resolve_export_path, ExportOutcome};
use crate::wizard::{InputBuffer, Stage};

use super::widgets::Notice;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking message waiting for acknowledgement
    Notice(Notice),
    /// Save-path prompt on the summary step
    SaveResults,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The active wizard step
    pub stage: Stage,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Path typed into the save dialog
    pub save_input: InputBuffer,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App on the income step
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            stage: Stage::default(),
            active_dialog: ActiveDialog::default(),
            save_input: InputBuffer::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.active_dialog = ActiveDialog::Notice(notice);
    }

    pub fn show_error(&mut self, error: &BudgetError) {
        self.show_notice(Notice::from_error(error));
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// "Next" on the income step
    pub fn submit_income(&mut self) {
        let result = match &self.stage {
            Stage::Income(stage) => stage.submit(),
            _ => return,
        };

        match result {
            Ok(next) => {
                self.stage = Stage::Expenses(next);
                self.clear_status();
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// "Add Expense" on the expense step
    pub fn add_expense(&mut self) {
        let result = match &mut self.stage {
            Stage::Expenses(stage) => stage.add_expense(),
            _ => return,
        };

        match result {
            Ok(entry) => {
                self.set_status(format!(
                    "Added {} {}",
                    entry.category(),
                    entry.amount().format_with_symbol(&self.settings.currency_symbol)
                ));
                self.show_notice(Notice::success("Expense added successfully"));
            }
            Err(e) => self.show_error(&e),
        }
    }

    pub fn select_next_category(&mut self) {
        if let Stage::Expenses(stage) = &mut self.stage {
            stage.select_next_category();
        }
    }

    pub fn select_prev_category(&mut self) {
        if let Stage::Expenses(stage) = &mut self.stage {
            stage.select_prev_category();
        }
    }

    /// "Calculate Budget" on the expense step
    pub fn finish_expenses(&mut self) {
        if !matches!(self.stage, Stage::Expenses(_)) {
            return;
        }

        if let Stage::Expenses(stage) = std::mem::take(&mut self.stage) {
            self.stage = Stage::Summary(stage.finish());
            self.clear_status();
        }
    }

    /// "Save Results to CSV" on the summary step
    pub fn open_save_dialog(&mut self) {
        if !matches!(self.stage, Stage::Summary(_)) {
            return;
        }

        self.save_input
            .set(default_export_file_name(Local::now().date_naive()));
        self.active_dialog = ActiveDialog::SaveResults;
    }

    /// Confirm the save dialog; blank input behaves like cancel
    pub fn confirm_save(&mut self) {
        let path = resolve_export_path(
            self.save_input.value(),
            self.settings.default_export_dir.as_deref(),
        );

        let result = match &self.stage {
            Stage::Summary(stage) => stage.export(path.as_deref()),
            _ => return,
        };

        self.close_dialog();
        self.save_input.clear();

        match result {
            Ok(ExportOutcome::Saved { path, rows }) => {
                self.set_status(format!("Saved {} expenses to {}", rows, path.display()));
                self.show_notice(Notice::success("File saved successfully"));
            }
            Ok(ExportOutcome::Cancelled) => self.set_status("Save cancelled"),
            Err(e) => self.show_error(&e),
        }
    }

    /// Dismiss the save dialog without writing
    pub fn cancel_save(&mut self) {
        self.close_dialog();
        self.save_input.clear();
        self.set_status("Save cancelled");
        info!("save dialog dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use tempfile::TempDir;

    fn type_into(input: &mut InputBuffer, text: &str) {
        input.set(text);
    }

    fn app_on_expenses(settings: &Settings) -> App<'_> {
        let mut app = App::new(settings);
        if let Stage::Income(stage) = &mut app.stage {
            type_into(&mut stage.income_input, "1500.00");
        }
        app.submit_income();
        app
    }

    #[test]
    fn test_starts_on_income() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert!(matches!(app.stage, Stage::Income(_)));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_invalid_income_shows_notice_and_stays() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        if let Stage::Income(stage) = &mut app.stage {
            type_into(&mut stage.income_input, "abc");
        }

        app.submit_income();

        assert!(matches!(app.stage, Stage::Income(_)));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Notice(Notice::warning("Enter a positive number for Income"))
        );
    }

    #[test]
    fn test_valid_income_advances() {
        let settings = Settings::default();
        let app = app_on_expenses(&settings);
        let Stage::Expenses(stage) = &app.stage else {
            panic!("expected expense step");
        };
        assert_eq!(stage.income().amount().value(), 1500.0);
    }

    #[test]
    fn test_add_expense_confirms() {
        let settings = Settings::default();
        let mut app = app_on_expenses(&settings);
        if let Stage::Expenses(stage) = &mut app.stage {
            type_into(&mut stage.amount_input, "800");
        }

        app.add_expense();

        assert_eq!(
            app.active_dialog,
            ActiveDialog::Notice(Notice::success("Expense added successfully"))
        );
        assert_eq!(app.status_message.as_deref(), Some("Added Rent $ 800.00"));
        let Stage::Expenses(stage) = &app.stage else {
            panic!("expected expense step");
        };
        assert_eq!(stage.expenses().len(), 1);
        assert!(stage.amount_input.is_empty());
    }

    #[test]
    fn test_category_selection_only_on_expense_step() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.select_next_category();
        assert!(matches!(app.stage, Stage::Income(_)));

        let mut app = app_on_expenses(&settings);
        app.select_next_category();
        app.select_next_category();
        let Stage::Expenses(stage) = &app.stage else {
            panic!("expected expense step");
        };
        assert_eq!(stage.category, ExpenseCategory::FoodDrink);
    }

    #[test]
    fn test_finish_moves_to_summary() {
        let settings = Settings::default();
        let mut app = app_on_expenses(&settings);

        app.finish_expenses();

        assert!(matches!(app.stage, Stage::Summary(_)));
        app.finish_expenses();
        assert!(matches!(app.stage, Stage::Summary(_)));
    }

    #[test]
    fn test_save_dialog_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            default_export_dir: Some(temp_dir.path().to_path_buf()),
            ..Settings::default()
        };
        let mut app = app_on_expenses(&settings);
        if let Stage::Expenses(stage) = &mut app.stage {
            type_into(&mut stage.amount_input, "800");
        }
        app.add_expense();
        app.close_dialog();
        app.finish_expenses();

        app.open_save_dialog();
        assert_eq!(app.active_dialog, ActiveDialog::SaveResults);
        assert!(app.save_input.value().starts_with("budget-"));

        app.save_input.set("march");
        app.confirm_save();

        assert_eq!(
            app.active_dialog,
            ActiveDialog::Notice(Notice::success("File saved successfully"))
        );
        let contents = std::fs::read_to_string(temp_dir.path().join("march.csv")).unwrap();
        assert_eq!(contents, "Category,Amount\nRent,800.0\n");
    }

    #[test]
    fn test_save_failure_shows_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut app = app_on_expenses(&settings);
        app.finish_expenses();

        app.open_save_dialog();
        let target = temp_dir.path().join("missing").join("out.csv");
        app.save_input.set(target.to_string_lossy());
        app.confirm_save();

        let ActiveDialog::Notice(notice) = &app.active_dialog else {
            panic!("expected a notice");
        };
        assert_eq!(notice.kind, crate::tui::widgets::NoticeKind::Error);
        assert!(notice.message.contains("out.csv"));
    }

    #[test]
    fn test_blank_path_and_cancel_write_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            default_export_dir: Some(temp_dir.path().to_path_buf()),
            ..Settings::default()
        };
        let mut app = app_on_expenses(&settings);
        app.finish_expenses();

        app.open_save_dialog();
        app.save_input.clear();
        app.confirm_save();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Save cancelled"));

        app.open_save_dialog();
        app.cancel_save();
        assert!(!app.has_dialog());

        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_dialog_only_on_summary() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_save_dialog();
        assert!(!app.has_dialog());
    }
}
