//! Domain Layer
//!
//! This is the core of emicalc - pure loan arithmetic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Amount, AnnualRate, Tenure, RoundingMode)
//! - `entities/` - Loan quote input/result and the finance application record
//! - `services/` - The EMI engine
//! - `policies/` - Marketplace loan limits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system, network or terminal
//! 2. **Pure Functions** - Services are stateless and safe to call from any thread
//! 3. **No formatting** - Amounts leave the domain as numbers; rendering is presentation

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
