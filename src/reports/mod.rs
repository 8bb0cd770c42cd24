//! Reports module for the budget wizard
//!
//! Provides the end-of-wizard budget summary.

pub mod summary;

pub use summary::{expense_rows, format_expense_table, BudgetSummary, ExpenseRow};
