//! The three-step budgeting wizard
//!
//! Income, then expenses, then a summary with optional export. The step
//! types in [`steps`] hold all the domain state and validation; front ends
//! (the terminal UI and the line-based [`prompt`] runner) only feed them
//! input and present their results.

pub mod input;
pub mod prompt;
pub mod steps;

pub use input::InputBuffer;
pub use prompt::{PromptOutcome, PromptWizard};
pub use steps::{ExpenseStage, IncomeStage, Stage, SummaryStage};
