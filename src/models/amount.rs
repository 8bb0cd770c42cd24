//! Amount type for representing currency values
//!
//! Amounts are plain `f64` values wrapped in a newtype. They have two
//! renderings: the display form shown on screen (`$ 800.00`) and the raw
//! form written to export files (`800.0`).

use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse an amount from user input
    ///
    /// Surrounding whitespace is ignored. Accepts anything `f64` parses
    /// ("800", "1500.00", "-5", ".5", "1e3") as long as the result is finite.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self(value))
    }

    /// The plain decimal written to export files
    ///
    /// Whole numbers keep one decimal place (`800.0`); anything else uses the
    /// shortest representation that round-trips (`12.345`).
    pub fn to_raw_string(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("{:.1}", self.0)
        } else {
            format!("{}", self.0)
        }
    }

    /// Format with a currency symbol, e.g. `$ 800.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "No amount entered"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("1500.00").unwrap().value(), 1500.0);
        assert_eq!(Amount::parse("800").unwrap().value(), 800.0);
        assert_eq!(Amount::parse("  42.5 ").unwrap().value(), 42.5);
        assert_eq!(Amount::parse("-5").unwrap().value(), -5.0);
        assert_eq!(Amount::parse(".5").unwrap().value(), 0.5);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("$10").is_err());
        assert!(Amount::parse("1,000").is_err());
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("NaN").is_err());
    }

    #[test]
    fn test_raw_string() {
        assert_eq!(Amount::new(800.0).to_raw_string(), "800.0");
        assert_eq!(Amount::new(200.0).to_raw_string(), "200.0");
        assert_eq!(Amount::new(12.345).to_raw_string(), "12.345");
        assert_eq!(Amount::new(0.1).to_raw_string(), "0.1");
        assert_eq!(Amount::new(1234567.0).to_raw_string(), "1234567.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(1500.0).to_string(), "1500.00");
        assert_eq!(Amount::new(-150.0).to_string(), "-150.00");
        assert_eq!(Amount::new(800.0).format_with_symbol("$"), "$ 800.00");
        assert_eq!(Amount::new(9.999).format_with_symbol("€"), "€ 10.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(1000.0);
        let b = Amount::new(1500.0);

        assert_eq!((a + b).value(), 2500.0);
        assert_eq!((a - b).value(), -500.0);
        assert!((a - b).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(800.0), Amount::new(200.0), Amount::new(0.5)];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 1000.5);

        let empty: Amount = Vec::<Amount>::new().into_iter().sum();
        assert!(empty.is_zero());
    }
}
