//! Non-interactive summary command
//!
//! Runs the whole wizard from command-line arguments: income, expenses,
//! optional CSV output.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::export::{ensure_csv_extension, ExportOutcome};
use crate::models::ExpenseCategory;
use crate::wizard::IncomeStage;

/// One `--expense CATEGORY=AMOUNT` argument
///
/// The amount stays as typed so it is validated by the same path as
/// interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseArg {
    pub category: ExpenseCategory,
    pub amount: String,
}

/// Arguments for `budget summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Income for the period
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: String,

    /// Expense as CATEGORY=AMOUNT (repeatable, kept in order)
    #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT", value_parser = parse_expense_arg)]
    pub expenses: Vec<ExpenseArg>,

    /// Write the expense list to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse `Rent=800`, `food=12.50`, `3=40`
pub fn parse_expense_arg(s: &str) -> Result<ExpenseArg, String> {
    let (category, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got '{}'", s))?;

    let category = category.trim();
    let category = match category.parse::<usize>() {
        Ok(n) if n >= 1 => ExpenseCategory::from_index(n - 1),
        Ok(_) => None,
        Err(_) => ExpenseCategory::parse(category),
    }
    .ok_or_else(|| {
        format!(
            "unknown category '{}' (expected one of: {})",
            category,
            category_names()
        )
    })?;

    Ok(ExpenseArg {
        category,
        amount: amount.to_string(),
    })
}

fn category_names() -> String {
    ExpenseCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Handle `budget summary`
pub fn handle_summary_command<W: Write>(
    args: SummaryArgs,
    settings: &Settings,
    out: &mut W,
) -> BudgetResult<()> {
    let mut stage = IncomeStage::with_input(args.income).submit()?;

    for expense in &args.expenses {
        stage.select_category(expense.category);
        stage.amount_input.set(expense.amount.as_str());
        stage.add_expense()?;
    }

    let stage = stage.finish();
    let summary = stage.summary();
    write!(
        out,
        "{}",
        summary.format_terminal(stage.expenses(), &settings.currency_symbol)
    )?;

    if let Some(output) = args.output {
        let path = ensure_csv_extension(output);
        if let ExportOutcome::Saved { path, rows } = stage.export(Some(path.as_path()))? {
            writeln!(out, "Exported {} expenses to: {}", rows, path.display())?;
        }
    }

    info!(
        expenses = stage.expenses().len(),
        balance = summary.balance.value(),
        "summary command finished"
    );
    Ok(())
}

/// Handle `budget categories`
pub fn handle_categories_command<W: Write>(out: &mut W) -> BudgetResult<()> {
    writeln!(out, "Expense categories:")?;
    for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, category)?;
    }
    Ok(())
}
