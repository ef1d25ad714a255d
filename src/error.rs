//! Error types for emicalc
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for emicalc operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Main error type for emicalc operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Tenure of zero years, or too long to schedule monthly
    #[error("invalid tenure of {years} years - expected a positive number of years")]
    InvalidTenure { years: u32 },

    /// Car price / loan base must be positive
    #[error("invalid principal {principal} - car price must be greater than zero")]
    InvalidPrincipal { principal: u64 },

    /// Down payment larger than the amount it is paid against
    #[error("down payment {down_payment} exceeds car price {principal}")]
    DownPaymentExceedsPrincipal { down_payment: u64, principal: u64 },

    /// Negative, NaN or infinite annual rate
    #[error("invalid annual rate {percent}% - rate must be a finite, non-negative percentage")]
    InvalidRate { percent: f64 },

    /// Amortization produced NaN or infinity
    #[error("installment is not finite for {payments} payments at {percent}% - inputs are out of range")]
    NonFiniteInstallment { payments: u32, percent: f64 },

    /// Totals do not fit into the money representation
    #[error("loan totals overflow: {installment} x {payments} payments")]
    Overflow { installment: u64, payments: u32 },

    /// A boundary field failed to parse or validate
    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Limit configuration is internally inconsistent
    #[error("invalid loan limits: {0}")]
    InvalidLimits(String),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Whether the error rejects the loan parameters themselves.
    ///
    /// Callers use this to short-circuit display instead of rendering a
    /// nonsensical figure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuoteError::InvalidTenure { .. }
                | QuoteError::InvalidPrincipal { .. }
                | QuoteError::DownPaymentExceedsPrincipal { .. }
                | QuoteError::InvalidRate { .. }
                | QuoteError::NonFiniteInstallment { .. }
                | QuoteError::Overflow { .. }
        )
    }
}
