//! Finance application drafting
//!
//! Turns the calculator state plus the applicant fields collected next to it
//! (monthly income, employment type) into a `finance_applications` insert
//! record. Submitting the record is the hosting service's job.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::domain::entities::{FinanceApplication, LoanQuote, LoanQuoteInput};
use crate::domain::services::compute_loan_quote_with;
use crate::domain::value_objects::{Amount, EmploymentType, RoundingMode, Tenure};
use crate::error::QuoteResult;

/// Everything needed to draft an application
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationRequest {
    pub car_id: String,
    pub user_id: String,
    pub input: LoanQuoteInput,
    pub rounding: RoundingMode,
    pub monthly_income: Amount,
    pub employment_type: EmploymentType,
    pub credit_score: Option<u16>,
}

/// Insert record together with the quote it was drafted from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationDraft {
    pub application: FinanceApplication,
    pub quote: LoanQuote,
}

impl ApplicationDraft {
    /// Share of the monthly income taken by the installment, in percent
    pub fn installment_to_income_percent(&self) -> f64 {
        let income = self.application.monthly_income.as_f64();
        if income == 0.0 {
            return 0.0;
        }
        self.quote.monthly_emi.as_f64() / income * 100.0
    }
}

/// Draft an application timestamped now.
pub fn draft_application(request: &ApplicationRequest) -> QuoteResult<ApplicationDraft> {
    draft_application_at(request, Utc::now())
}

/// Draft an application with an explicit creation time.
pub fn draft_application_at(
    request: &ApplicationRequest,
    created_at: DateTime<Utc>,
) -> QuoteResult<ApplicationDraft> {
    let quote = compute_loan_quote_with(&request.input, request.rounding)?;
    let tenure = Tenure::from_years(request.input.tenure_years)?;

    let application = FinanceApplication::new(
        request.car_id.as_str(),
        request.user_id.as_str(),
        quote.financed_principal,
        tenure,
        request.input.down_payment,
        request.monthly_income,
        request.employment_type,
        request.credit_score,
        created_at,
    )?;

    info!(
        car_id = %application.car_id,
        loan_amount = application.loan_amount.units(),
        tenure_years = application.loan_tenure,
        "drafted finance application"
    );

    Ok(ApplicationDraft { application, quote })
}
