//! Wizard steps
//!
//! The three screens of the wizard as plain state structs. Each step builds
//! the next one from what it collected; there is no way back.

pub mod expenses;
pub mod income;
pub mod summary;

pub use expenses::ExpenseStage;
pub use income::IncomeStage;
pub use summary::SummaryStage;

/// Whichever step is currently active
#[derive(Debug, Clone)]
pub enum Stage {
    Income(IncomeStage),
    Expenses(ExpenseStage),
    Summary(SummaryStage),
}

impl Default for Stage {
    fn default() -> Self {
        Self::Income(IncomeStage::default())
    }
}

impl Stage {
    /// Window title for the step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income(_) => "Enter Income",
            Self::Expenses(_) => "Enter Expenses",
            Self::Summary(_) => "Results",
        }
    }

    /// Step number, 1-based
    pub fn number(&self) -> usize {
        match self {
            Self::Income(_) => 1,
            Self::Expenses(_) => 2,
            Self::Summary(_) => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Summary(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_income() {
        let stage = Stage::default();
        assert!(matches!(stage, Stage::Income(_)));
        assert_eq!(stage.number(), 1);
        assert_eq!(stage.title(), "Enter Income");
        assert!(!stage.is_terminal());
    }

    #[test]
    fn test_forward_only_sequence() {
        let expenses = IncomeStage::with_input("100").submit().unwrap();
        let stage = Stage::Expenses(expenses.clone());
        assert_eq!(stage.number(), 2);

        let stage = Stage::Summary(expenses.finish());
        assert_eq!(stage.number(), 3);
        assert!(stage.is_terminal());
    }
}
