//! Budget summary report
//!
//! Derives total expenses and balance from the income and the expense list.
//! Nothing here is stored: the report is rebuilt every time it is needed.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Amount, ExpenseList, Income};

/// Totals for one wizard run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// The captured income
    pub total_income: Amount,
    /// Sum of every expense amount
    pub total_expenses: Amount,
    /// Income minus expenses, may be negative
    pub balance: Amount,
}

impl BudgetSummary {
    /// Compute the summary
    pub fn generate(income: Income, expenses: &ExpenseList) -> Self {
        let total_income = income.amount();
        let total_expenses = expenses.total();

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Whether expenses exceed income
    pub fn is_overspent(&self) -> bool {
        self.balance.is_negative()
    }

    /// The three summary labels, one per line
    pub fn format_totals(&self) -> String {
        format!(
            "Total Income: {}\nTotal Expenses: {}\nBalance: {}\n",
            self.total_income, self.total_expenses, self.balance
        )
    }

    /// Format totals and the expense table for terminal output
    pub fn format_terminal(&self, expenses: &ExpenseList, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Results\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&self.format_totals());
        output.push('\n');
        output.push_str(&format_expense_table(expenses, currency_symbol));
        output.push('\n');

        output
    }
}

/// One row of the expense table
#[derive(Debug, Clone, Tabled)]
pub struct ExpenseRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

/// Table rows in list order, amounts in display form
pub fn expense_rows(expenses: &ExpenseList, currency_symbol: &str) -> Vec<ExpenseRow> {
    expenses
        .iter()
        .map(|entry| ExpenseRow {
            category: entry.category().to_string(),
            amount: entry.amount().format_with_symbol(currency_symbol),
        })
        .collect()
}

/// Render the expense list as a two-column table
pub fn format_expense_table(expenses: &ExpenseList, currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses entered.".to_string();
    }

    Table::new(expense_rows(expenses, currency_symbol))
        .with(Style::modern())
        .to_string()
}
