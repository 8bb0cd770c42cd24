//! Summary and export step
//!
//! Final wizard screen. Holds the frozen income and expense list; totals are
//! recomputed on every call rather than stored.

use std::path::Path;

use tracing::{error, info};

use crate::error::BudgetResult;
use crate::export::{export_expenses, ExportOutcome};
use crate::models::{ExpenseList, Income};
use crate::reports::BudgetSummary;

/// State of the summary screen
#[derive(Debug, Clone)]
pub struct SummaryStage {
    income: Income,
    expenses: ExpenseList,
}

impl SummaryStage {
    pub fn new(income: Income, expenses: ExpenseList) -> Self {
        Self { income, expenses }
    }

    pub fn income(&self) -> Income {
        self.income
    }

    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    /// Totals derived from the current income and expenses
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::generate(self.income, &self.expenses)
    }

    /// Export the expense list; `None` means the user cancelled
    pub fn export(&self, path: Option<&Path>) -> BudgetResult<ExportOutcome> {
        match export_expenses(path, &self.expenses) {
            Ok(ExportOutcome::Saved { path, rows }) => {
                info!(path = %path.display(), rows, "expenses exported");
                Ok(ExportOutcome::Saved { path, rows })
            }
            Ok(ExportOutcome::Cancelled) => {
                info!("export cancelled");
                Ok(ExportOutcome::Cancelled)
            }
            Err(e) => {
                error!(error = %e, "export failed");
                Err(e)
            }
        }
    }
}
