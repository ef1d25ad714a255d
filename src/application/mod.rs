//! Application Layer
//!
//! Use cases that orchestrate the loan flows.
//! This layer:
//! - Depends on the Domain layer (entities, services, policies)
//! - Does NOT contain loan arithmetic (that lives in `domain::services`)
//! - Adds the advisory checks and logging around each computation
//!
//! ## Use Cases
//!
//! - `QuoteUseCase` - One quote, checked (and optionally clamped) against the loan limits
//! - `compare_tenures` - One quote per tenure year for side-by-side comparison
//! - `draft_application` - Quote plus a `finance_applications` insert record

pub mod apply;
pub mod compare;
pub mod quote;

pub use apply::{draft_application, draft_application_at, ApplicationDraft, ApplicationRequest};
pub use compare::{compare_tenures, TenureQuote, MAX_COMPARED_TENURES};
pub use quote::{QuoteOptions, QuoteOutcome, QuoteUseCase};
