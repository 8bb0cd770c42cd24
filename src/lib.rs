//! Budget Wizard - a three-step personal budget calculator
//!
//! The user enters an income, then any number of categorized expenses, and
//! gets back the total expenses and the remaining balance. The expense list
//! can be saved as a two-column CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, categories, income and the expense list
//! - `wizard`: The three wizard steps and the line-based front end
//! - `reports`: Budget summary calculation and formatting
//! - `export`: CSV export
//! - `tui`: Terminal user interface
//! - `cli`: Non-interactive command handlers
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_wizard::wizard::IncomeStage;
//!
//! let mut expenses = IncomeStage::with_input("1500.00").submit()?;
//! expenses.amount_input.set("800");
//! expenses.add_expense()?;
//! let summary = expenses.finish().summary();
//! assert_eq!(summary.balance.value(), 700.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod tui;
pub mod wizard;

pub use error::{BudgetError, BudgetResult};
