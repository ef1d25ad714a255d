//! Money and rate formatting for the text views
//!
//! Amounts are grouped the Indian way: the last three digits, then pairs
//! (`4,00,000`, `12,34,567`).

use emicalc::Amount;

use crate::ui::theme;

/// Currency prefix used by the text views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    symbol: String,
}

impl Money {
    /// Uses `symbol`, or `Rs.` when unicode is off and `symbol` is not ASCII
    pub fn new(symbol: &str, supports_unicode: bool) -> Self {
        let symbol = if !supports_unicode && !symbol.is_ascii() {
            theme::currency::RUPEE_ASCII
        } else {
            symbol
        };
        Self {
            symbol: symbol.to_string(),
        }
    }

    pub fn amount(&self, amount: Amount) -> String {
        self.with_symbol(&group_indian(amount.units()))
    }

    /// Signed amounts put the minus before the symbol: `-₹40`
    pub fn signed(&self, value: i64) -> String {
        let grouped = self.with_symbol(&group_indian(value.unsigned_abs()));
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    fn with_symbol(&self, digits: &str) -> String {
        // word-like symbols (Rs., INR) need a separating space
        let spaced = self
            .symbol
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.');
        if spaced {
            format!("{} {}", self.symbol, digits)
        } else {
            format!("{}{}", self.symbol, digits)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::new(theme::currency::RUPEE, true)
    }
}

/// Group digits with the Indian numbering system
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `8.5%`, `10%`
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// `1 year`, `5 years`
pub fn years(value: u32) -> String {
    if value == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", value)
    }
}
