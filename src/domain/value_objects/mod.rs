//! Domain Value Objects
//!
//! Immutable value types that represent loan concepts.

mod amount;
mod employment;
mod rate;
mod rounding;
mod tenure;

pub use amount::Amount;
pub use employment::EmploymentType;
pub use rate::AnnualRate;
pub use rounding::RoundingMode;
pub use tenure::Tenure;
