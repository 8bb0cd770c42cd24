//! Expense entry and expense list models

use super::amount::Amount;
use super::category::ExpenseCategory;
use crate::error::{BudgetError, BudgetResult, InputField};

/// A single categorized expense
///
/// The amount is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseEntry {
    category: ExpenseCategory,
    amount: Amount,
}

impl ExpenseEntry {
    /// Validate an already-parsed amount
    pub fn new(category: ExpenseCategory, amount: Amount) -> BudgetResult<Self> {
        if !amount.value().is_finite() {
            return Err(BudgetError::invalid_input(
                InputField::Amount,
                amount.value().to_string(),
            ));
        }
        if !amount.is_positive() {
            return Err(BudgetError::NonPositiveValue(amount.value()));
        }
        Ok(Self { category, amount })
    }

    /// Parse and validate raw amount text for a category
    pub fn parse(category: ExpenseCategory, input: &str) -> BudgetResult<Self> {
        let amount =
            Amount::parse(input).map_err(|_| BudgetError::invalid_input(InputField::Amount, input))?;
        Self::new(category, amount)
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Ordered, append-only list of expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseList {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end
    pub fn push(&mut self, entry: ExpenseEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseEntry> {
        self.entries.iter()
    }

    /// Sum of all amounts, zero when empty
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

impl<'a> IntoIterator for &'a ExpenseList {
    type Item = &'a ExpenseEntry;
    type IntoIter = std::slice::Iter<'a, ExpenseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_parse() {
        let entry = ExpenseEntry::parse(ExpenseCategory::Rent, "800").unwrap();
        assert_eq!(entry.category(), ExpenseCategory::Rent);
        assert_eq!(entry.amount().value(), 800.0);
    }

    #[test]
    fn test_entry_rejects_zero_and_negative() {
        assert!(matches!(
            ExpenseEntry::parse(ExpenseCategory::Other, "0").unwrap_err(),
            BudgetError::NonPositiveValue(_)
        ));
        assert!(matches!(
            ExpenseEntry::parse(ExpenseCategory::FoodDrink, "-5").unwrap_err(),
            BudgetError::NonPositiveValue(v) if v == -5.0
        ));
    }

    #[test]
    fn test_entry_rejects_text() {
        let err = ExpenseEntry::parse(ExpenseCategory::Utilities, "ten").unwrap_err();
        assert!(matches!(
            err,
            BudgetError::InvalidInput {
                field: InputField::Amount,
                ..
            }
        ));
    }

    #[test]
    fn test_list_preserves_order() {
        let mut list = ExpenseList::new();
        list.push(ExpenseEntry::parse(ExpenseCategory::Utilities, "200").unwrap());
        list.push(ExpenseEntry::parse(ExpenseCategory::Rent, "800").unwrap());
        list.push(ExpenseEntry::parse(ExpenseCategory::Utilities, "15.5").unwrap());

        let categories: Vec<_> = list.iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                ExpenseCategory::Utilities,
                ExpenseCategory::Rent,
                ExpenseCategory::Utilities
            ]
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list.total().value(), 1015.5);
    }

    #[test]
    fn test_empty_total_is_zero() {
        let list = ExpenseList::new();
        assert!(list.is_empty());
        assert!(list.total().is_zero());
    }
}
