//! FinanceApplication entity - a loan application ready to insert
//!
//! Mirrors the insert shape of the hosted `finance_applications` table.
//! Fields are validated here, at the boundary, rather than by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Amount, EmploymentType, Tenure};
use crate::error::{QuoteError, QuoteResult};

/// Lowest and highest bureau score accepted on an application
pub const CREDIT_SCORE_RANGE: std::ops::RangeInclusive<u16> = 300..=900;

/// Review state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insert record for `finance_applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceApplication {
    pub car_id: String,
    pub user_id: String,
    /// Financed principal (car price minus down payment)
    pub loan_amount: Amount,
    /// Tenure in years
    pub loan_tenure: u32,
    pub monthly_income: Amount,
    pub employment_type: EmploymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u16>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl FinanceApplication {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        car_id: impl Into<String>,
        user_id: impl Into<String>,
        loan_amount: Amount,
        tenure: Tenure,
        down_payment: Amount,
        monthly_income: Amount,
        employment_type: EmploymentType,
        credit_score: Option<u16>,
        created_at: DateTime<Utc>,
    ) -> QuoteResult<Self> {
        let car_id = non_empty("car id", car_id.into())?;
        let user_id = non_empty("user id", user_id.into())?;

        if loan_amount.is_zero() {
            return Err(QuoteError::InvalidField {
                field: "loan amount",
                value: loan_amount.to_string(),
                reason: "nothing left to finance after the down payment".to_string(),
            });
        }

        if monthly_income.is_zero() {
            return Err(QuoteError::InvalidField {
                field: "monthly income",
                value: monthly_income.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if let Some(score) = credit_score {
            if !CREDIT_SCORE_RANGE.contains(&score) {
                return Err(QuoteError::InvalidField {
                    field: "credit score",
                    value: score.to_string(),
                    reason: format!(
                        "expected a score between {} and {}",
                        CREDIT_SCORE_RANGE.start(),
                        CREDIT_SCORE_RANGE.end()
                    ),
                });
            }
        }

        Ok(Self {
            car_id,
            user_id,
            loan_amount,
            loan_tenure: tenure.years(),
            monthly_income,
            employment_type,
            down_payment: (!down_payment.is_zero()).then_some(down_payment),
            credit_score,
            status: ApplicationStatus::Pending,
            created_at,
        })
    }
}

fn non_empty(field: &'static str, value: String) -> QuoteResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::InvalidField {
            field,
            value,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
