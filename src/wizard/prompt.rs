//! Line-based wizard
//!
//! Runs the same three steps as the terminal UI using plain stdin/stdout
//! prompts. Generic over the reader and writer so it can be driven from tests.

use std::io::{BufRead, Write};

use chrono::Local;

use super::steps::{ExpenseStage, IncomeStage, SummaryStage};
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{default_export_file_name, resolve_export_path, ExportOutcome};
use crate::models::ExpenseCategory;

/// How a prompt session ended
#[derive(Debug)]
pub enum PromptOutcome {
    /// All three steps ran; holds the final step
    Completed(SummaryStage),
    /// Input ended before the summary was reached
    Aborted,
}

/// Drives the wizard over a line-oriented reader and writer
pub struct PromptWizard<'a, R, W> {
    reader: R,
    writer: W,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> PromptWizard<'a, R, W> {
    pub fn new(reader: R, writer: W, settings: &'a Settings) -> Self {
        Self {
            reader,
            writer,
            settings,
        }
    }

    /// Run the wizard to completion
    pub fn run(&mut self) -> BudgetResult<PromptOutcome> {
        writeln!(self.writer)?;
        writeln!(self.writer, "===========================================")?;
        writeln!(self.writer, "  Budget Wizard")?;
        writeln!(self.writer, "===========================================")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Press Ctrl+D at any time to stop.")?;

        let Some(expense_stage) = self.capture_income()? else {
            return Ok(PromptOutcome::Aborted);
        };

        let Some(summary_stage) = self.capture_expenses(expense_stage)? else {
            return Ok(PromptOutcome::Aborted);
        };

        let summary = summary_stage.summary();
        writeln!(self.writer)?;
        write!(
            self.writer,
            "{}",
            summary.format_terminal(summary_stage.expenses(), &self.settings.currency_symbol)
        )?;

        self.offer_export(&summary_stage)?;

        Ok(PromptOutcome::Completed(summary_stage))
    }

    /// Step 1: loop until a valid income is entered
    fn capture_income(&mut self) -> BudgetResult<Option<ExpenseStage>> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Step 1: Enter Income")?;
        writeln!(self.writer, "====================")?;

        loop {
            let Some(line) = self.prompt("Income: ")? else {
                return Ok(None);
            };

            match IncomeStage::with_input(line).submit() {
                Ok(next) => return Ok(Some(next)),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Step 2: add expenses until the user types `done`
    fn capture_expenses(&mut self, mut stage: ExpenseStage) -> BudgetResult<Option<SummaryStage>> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Step 2: Select Expenses and Enter Amount")?;
        writeln!(self.writer, "========================================")?;
        writeln!(self.writer)?;
        for category in ExpenseCategory::ALL {
            writeln!(self.writer, "  {}. {}", category.index() + 1, category)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Press Enter to keep the current category. Type 'done' (or 'd') at either prompt to calculate the budget."
        )?;

        loop {
            let prompt = format!("Category [{}]: ", stage.category);
            let Some(choice) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            if is_done(&choice) {
                return Ok(Some(stage.finish()));
            }

            if !choice.is_empty() {
                match parse_category_choice(&choice) {
                    Some(category) => stage.select_category(category),
                    None => {
                        writeln!(self.writer, "Choose 1-{} or a category name.", ExpenseCategory::ALL.len())?;
                        continue;
                    }
                }
            }

            let Some(amount) = self.prompt("Amount: ")? else {
                return Ok(None);
            };
            if is_done(&amount) {
                return Ok(Some(stage.finish()));
            }

            stage.amount_input.set(amount);
            match stage.add_expense() {
                Ok(_) => writeln!(self.writer, "Expense added successfully")?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Step 3: offer to save; retry on failure, blank input skips
    fn offer_export(&mut self, stage: &SummaryStage) -> BudgetResult<()> {
        let suggestion = default_export_file_name(Local::now().date_naive());
        let prompt = format!("Save Results to CSV? Path (blank to skip, e.g. {}): ", suggestion);

        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(());
            };

            let path = resolve_export_path(&line, self.settings.default_export_dir.as_deref());
            match stage.export(path.as_deref()) {
                Ok(ExportOutcome::Saved { path, .. }) => {
                    writeln!(self.writer, "File saved successfully: {}", path.display())?;
                    return Ok(());
                }
                Ok(ExportOutcome::Cancelled) => return Ok(()),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }

    fn report(&mut self, error: &BudgetError) -> BudgetResult<()> {
        writeln!(self.writer, "Error: {}", error.user_message())?;
        Ok(())
    }
}

fn is_done(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "done" | "d")
}

/// Accepts a 1-based menu number or a category name
fn parse_category_choice(input: &str) -> Option<ExpenseCategory> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 => ExpenseCategory::from_index(n - 1),
        Ok(_) => None,
        Err(_) => ExpenseCategory::parse(input),
    }
}
