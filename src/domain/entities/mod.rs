//! Domain Entities
//!
//! - `LoanQuoteInput` / `LoanQuote` - parameters and result of one EMI computation
//! - `FinanceApplication` - insert record for the hosted `finance_applications` table

mod application;
mod quote;

pub use application::{ApplicationStatus, FinanceApplication};
pub use quote::{LoanQuote, LoanQuoteInput};
