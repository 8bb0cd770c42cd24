//! Income capture step
//!
//! First wizard screen: one income field and a "Next" action.

use tracing::{info, warn};

use super::expenses::ExpenseStage;
use crate::error::BudgetResult;
use crate::models::Income;
use crate::wizard::input::InputBuffer;

/// State of the income screen
#[derive(Debug, Clone, Default)]
pub struct IncomeStage {
    /// Text typed into the income field
    pub income_input: InputBuffer,
}

impl IncomeStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the income field
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            income_input: InputBuffer::with_content(input),
        }
    }

    /// Validate the income field and build the expense stage
    ///
    /// On failure this stage is left untouched.
    pub fn submit(&self) -> BudgetResult<ExpenseStage> {
        match Income::parse(self.income_input.value()) {
            Ok(income) => {
                info!(income = income.amount().value(), "income accepted");
                Ok(ExpenseStage::new(income))
            }
            Err(e) => {
                warn!(kind = e.kind(), input = self.income_input.value(), "income rejected");
                Err(e)
            }
        }
    }
}
