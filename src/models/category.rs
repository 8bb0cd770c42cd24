//! Expense category model
//!
//! The wizard offers a fixed, closed set of four categories. The first one is
//! the initial selection.

use std::fmt;

/// Category of an expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpenseCategory {
    /// Rent or mortgage
    #[default]
    Rent,
    /// Power, water, internet and the like
    Utilities,
    /// Groceries and eating out
    FoodDrink,
    /// Anything else
    Other,
}

impl ExpenseCategory {
    /// All categories, in selector order
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::FoodDrink,
        ExpenseCategory::Other,
    ];

    /// The label shown on screen and written to export files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::FoodDrink => "Food/Drink",
            Self::Other => "Other",
        }
    }

    /// Position in the selector (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Rent => 0,
            Self::Utilities => 1,
            Self::FoodDrink => 2,
            Self::Other => 3,
        }
    }

    /// Look up a category by selector position (0-based)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a category from its label or a short alias
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rent" => Some(Self::Rent),
            "utilities" | "utility" => Some(Self::Utilities),
            "food/drink" | "food_drink" | "fooddrink" | "food" | "drink" => Some(Self::FoodDrink),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The next category in selector order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category in selector order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
