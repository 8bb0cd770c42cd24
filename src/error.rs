//! Custom error types for the budget wizard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The first four variants are raised by the
//! wizard steps; the rest come from configuration and file handling.

use std::fmt;

use thiserror::Error;

/// Which text field a value was typed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Income,
    Amount,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Amount => write!(f, "Amount"),
        }
    }
}

/// The main error type for budget wizard operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Text that does not parse as a finite number
    #[error("Invalid {field}: '{input}' is not a number")]
    InvalidInput { field: InputField, input: String },

    /// Income below zero
    #[error("Income cannot be negative: {0}")]
    NegativeValue(f64),

    /// Expense amount at or below zero
    #[error("Amount must be greater than zero: {0}")]
    NonPositiveValue(f64),

    /// Export I/O failure
    #[error("Write error: {0}")]
    Write(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside of export
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BudgetError {
    /// Create an invalid-input error for a field
    pub fn invalid_input(field: InputField, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            input: input.into(),
        }
    }

    /// Check if this is a rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NegativeValue(_) | Self::NonPositiveValue(_)
        )
    }

    /// Short error kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::NegativeValue(_) => "negative_value",
            Self::NonPositiveValue(_) => "non_positive_value",
            Self::Write(_) => "write",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    /// The notice shown to the user, naming the expected correction
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { field, .. } => format!("Enter a positive number for {}", field),
            Self::NegativeValue(_) => "Enter a positive number for Income".to_string(),
            Self::NonPositiveValue(_) => "Enter a positive number for Amount".to_string(),
            Self::Write(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget wizard operations
pub type BudgetResult<T> = Result<T, BudgetError>;
