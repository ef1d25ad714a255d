//! Domain Policies
//!
//! Business rules that sit next to the engine without constraining it.

mod limits;

pub use limits::{LimitViolation, LoanLimits};
