//! # Unit Types
//!
//! Type-safe wrappers for the two quantities the planner deals in: money
//! (Indian Rupees) and percentages. Both are plain `f64` newtypes so JSON
//! serialization stays clean (just numbers).
//!
//! ## Currency Display
//!
//! Amounts are shown with `en-IN` digit grouping: the last three digits form
//! one group and every group above that has two digits.
//!
//! ```rust
//! use course_core::units::Rupees;
//!
//! let revenue = Rupees(1_429_960.0);
//! assert_eq!(revenue.display(), "₹14,29,960");
//! assert_eq!(revenue.display_ascii(), "Rs. 14,29,960");
//! assert_eq!(Rupees::parse_display("₹14,29,960"), Some(revenue));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Currency symbol used for on-screen display
pub const RUPEE_SYMBOL: &str = "₹";

/// Currency prefix used in exported documents
pub const RUPEE_ASCII_PREFIX: &str = "Rs. ";

// ============================================================================
// Currency
// ============================================================================

/// Amount in Indian Rupees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub f64);

impl Rupees {
    /// Zero rupees
    pub const ZERO: Rupees = Rupees(0.0);

    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Create from raw f64 value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Round to the nearest paisa (two decimal places).
    ///
    /// This is the precision kept by [`Rupees::display`], so a displayed
    /// amount parses back to exactly this value.
    pub fn rounded_to_paise(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    /// Format for screen display, e.g. `₹14,29,960` or `-₹2,500.50`.
    pub fn display(self) -> String {
        self.format_with_prefix(RUPEE_SYMBOL)
    }

    /// Format for exported documents, e.g. `Rs. 14,29,960`.
    pub fn display_ascii(self) -> String {
        self.format_with_prefix(RUPEE_ASCII_PREFIX)
    }

    /// Format without any currency prefix, e.g. `14,29,960`.
    pub fn display_plain(self) -> String {
        self.format_with_prefix("")
    }

    fn format_with_prefix(self, prefix: &str) -> String {
        // Integer count of paise, printed from the f64 itself so no integer
        // type bounds the magnitude.
        let paise_total = (self.0.abs() * 100.0).round();
        let digits = format!("{:03.0}", paise_total);
        let (whole, paise) = digits.split_at(digits.len() - 2);

        let sign = if self.0 < 0.0 && paise_total > 0.0 { "-" } else { "" };
        let mut out = format!("{}{}{}", sign, prefix, group_indian_digits(whole));
        let paise = paise.trim_end_matches('0');
        if !paise.is_empty() {
            out.push('.');
            out.push_str(paise);
        }
        out
    }

    /// Parse an amount produced by any of the display functions.
    ///
    /// Accepts the `₹` and `Rs.` prefixes, digit-group commas and a leading
    /// minus sign on either side of the prefix. Returns `None` if what
    /// remains is not a number.
    pub fn parse_display(s: &str) -> Option<Rupees> {
        let mut rest = s.trim();
        let mut negative = false;

        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped.trim_start();
        }
        rest = rest
            .strip_prefix(RUPEE_SYMBOL)
            .or_else(|| rest.strip_prefix(RUPEE_ASCII_PREFIX.trim_end()))
            .unwrap_or(rest)
            .trim_start();
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = !negative;
            rest = stripped;
        }

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || digits.starts_with('+') {
            return None;
        }
        let value: f64 = digits.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Rupees(if negative { -value } else { value }))
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Self {
        iter.fold(Rupees::ZERO, |acc, r| acc + r)
    }
}

/// Group an integer with `en-IN` separators: `1429960` becomes `14,29,960`.
pub fn format_indian_grouping(n: u64) -> String {
    group_indian_digits(&n.to_string())
}

/// Group a string of ASCII digits with `en-IN` separators
fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// ============================================================================
// Percentages
// ============================================================================

/// A percentage on the 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Create from raw f64 value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Convert to a fraction: 20% becomes 0.2
    pub fn as_decimal(self) -> f64 {
        self.0 / 100.0
    }

    /// The complementary share: 20% becomes 80%
    pub fn complement(self) -> Percent {
        Percent(100.0 - self.0)
    }

    /// Label form used for split shares: `80%`, `72.5%` or `0.04%`.
    ///
    /// Up to two decimals, trailing zeros dropped.
    pub fn display(self) -> String {
        let fixed = format!("{:.2}", self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        format!("{}%", trimmed)
    }

    /// Margin form with one decimal place: `71.7%`.
    pub fn display_one_decimal(self) -> String {
        format!("{:.1}%", self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Rupees);
impl_arithmetic!(Percent);
