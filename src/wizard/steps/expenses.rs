//! Expense capture step
//!
//! Second wizard screen: a category selector, an amount field, an "Add
//! Expense" action that can repeat, and "Calculate Budget" to move on.

use tracing::{debug, info, warn};

use super::summary::SummaryStage;
use crate::error::BudgetResult;
use crate::models::{ExpenseCategory, ExpenseEntry, ExpenseList, Income};
use crate::wizard::input::InputBuffer;

/// State of the expense screen
#[derive(Debug, Clone)]
pub struct ExpenseStage {
    income: Income,
    expenses: ExpenseList,
    /// Currently selected category; survives each add
    pub category: ExpenseCategory,
    /// Text typed into the amount field
    pub amount_input: InputBuffer,
}

impl ExpenseStage {
    /// Start with an empty list and the first category selected
    pub fn new(income: Income) -> Self {
        Self {
            income,
            expenses: ExpenseList::new(),
            category: ExpenseCategory::default(),
            amount_input: InputBuffer::new(),
        }
    }

    pub fn income(&self) -> Income {
        self.income
    }

    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    pub fn select_category(&mut self, category: ExpenseCategory) {
        self.category = category;
    }

    pub fn select_next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn select_prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Validate the amount field and append it under the selected category
    ///
    /// On success the amount field is cleared and the category kept. On
    /// failure neither the list nor the field changes.
    pub fn add_expense(&mut self) -> BudgetResult<ExpenseEntry> {
        let entry = match ExpenseEntry::parse(self.category, self.amount_input.value()) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    kind = e.kind(),
                    category = %self.category,
                    input = self.amount_input.value(),
                    "expense rejected"
                );
                return Err(e);
            }
        };

        self.expenses.push(entry);
        self.amount_input.clear();

        debug!(
            category = %entry.category(),
            amount = entry.amount().value(),
            count = self.expenses.len(),
            "expense added"
        );

        Ok(entry)
    }

    /// Freeze the list and move to the summary stage
    pub fn finish(self) -> SummaryStage {
        info!(count = self.expenses.len(), "expenses captured");
        SummaryStage::new(self.income, self.expenses)
    }
}
