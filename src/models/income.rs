//! Income model
//!
//! The single income figure captured by the first wizard stage.

use std::fmt;

use super::amount::Amount;
use crate::error::{BudgetError, BudgetResult, InputField};

/// A validated, non-negative income
///
/// Zero is a valid income. Only the constructors below can build one, so an
/// `Income` value is always `>= 0` and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Income(Amount);

impl Income {
    /// Validate an already-parsed amount
    pub fn new(amount: Amount) -> BudgetResult<Self> {
        if !amount.value().is_finite() {
            return Err(BudgetError::invalid_input(
                InputField::Income,
                amount.value().to_string(),
            ));
        }
        if amount.is_negative() {
            return Err(BudgetError::NegativeValue(amount.value()));
        }
        Ok(Self(amount))
    }

    /// Parse and validate raw text typed by the user
    pub fn parse(input: &str) -> BudgetResult<Self> {
        let amount =
            Amount::parse(input).map_err(|_| BudgetError::invalid_input(InputField::Income, input))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Amount {
        self.0
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
