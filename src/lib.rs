//! emicalc - car loan EMI engine and calculator
//!
//! The engine prices a car loan from four explicit inputs (car price, down
//! payment, tenure in years and annual rate) and returns the rounded monthly
//! installment together with the exact totals derived from it.
//!
//! ```
//! use emicalc::{compute_loan_quote, LoanQuoteInput};
//!
//! let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, 8.5)).unwrap();
//! assert_eq!(quote.monthly_emi.units(), 8207);
//! assert_eq!(quote.total_payment.units(), 8207 * 60);
//! ```
//!
//! Around the engine sit the marketplace limits policy, a tenure comparison,
//! a finance application draft and the configuration layer used by the CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    compare_tenures, draft_application, ApplicationDraft, ApplicationRequest, QuoteOptions,
    QuoteOutcome, QuoteUseCase, TenureQuote,
};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::entities::{ApplicationStatus, FinanceApplication, LoanQuote, LoanQuoteInput};
pub use domain::policies::{LimitViolation, LoanLimits};
pub use domain::services::{compute_loan_quote, compute_loan_quote_with, monthly_installment};
pub use domain::value_objects::{Amount, AnnualRate, EmploymentType, RoundingMode, Tenure};
pub use error::{QuoteError, QuoteResult};
