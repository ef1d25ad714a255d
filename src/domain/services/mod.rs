//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod emi;

pub use emi::{compute_loan_quote, compute_loan_quote_with, monthly_installment};
