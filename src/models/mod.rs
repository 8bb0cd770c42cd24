//! Core data models for the budget wizard
//!
//! This module contains the data structures of the budgeting domain: the
//! income figure, expense entries and their categories, and the amount type
//! they are all built on.

pub mod amount;
pub mod category;
pub mod expense;
pub mod income;

pub use amount::{Amount, AmountParseError};
pub use category::ExpenseCategory;
pub use expense::{ExpenseEntry, ExpenseList};
pub use income::Income;
