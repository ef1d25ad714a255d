//! Employment type collected next to the calculator for loan applications

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
    /// Business owner
    Business,
}

impl EmploymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::SelfEmployed => "self-employed",
            EmploymentType::Business => "business",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "Salaried",
            EmploymentType::SelfEmployed => "Self Employed",
            EmploymentType::Business => "Business Owner",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "salaried" => Ok(EmploymentType::Salaried),
            "self-employed" => Ok(EmploymentType::SelfEmployed),
            "business" | "business-owner" => Ok(EmploymentType::Business),
            _ => Err(QuoteError::InvalidField {
                field: "employment type",
                value: s.to_string(),
                reason: "expected salaried, self-employed or business".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
