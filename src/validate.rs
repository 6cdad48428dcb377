//! Raw form state and its validation into projection plans.
//!
//! The form structs back the text edits directly and are what the GUI
//! persists between sessions; nothing downstream ever sees unvalidated
//! text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projection::{InvestmentPlan, SavingsPlan};

/// Why a form failed validation, naming the offending field where one
/// exists. Every variant is terminal for the request; the form stays
/// editable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("number of months must be positive")]
    NonPositivePeriods,

    #[error("{field} cannot be negative")]
    NegativeAmount { field: &'static str },
}

/// Raw text of the savings calculator's three fields.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SavingsForm {
    pub initial: String,
    pub monthly: String,
    pub months: String,
}

impl Default for SavingsForm {
    fn default() -> Self {
        Self {
            initial: "1000".to_owned(),
            monthly: "100".to_owned(),
            months: "12".to_owned(),
        }
    }
}

impl SavingsForm {
    pub fn validate(&self) -> Result<SavingsPlan, ValidationError> {
        Ok(SavingsPlan {
            initial: number("initial money", &self.initial)?,
            monthly: number("monthly saving", &self.monthly)?,
            months: months(&self.months)?,
        })
    }
}

/// Raw text of the investment calculator's four fields.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InvestmentForm {
    pub initial: String,
    pub monthly: String,
    pub months: String,
    pub annual_rate: String,
}

impl Default for InvestmentForm {
    fn default() -> Self {
        Self {
            initial: "1000".to_owned(),
            monthly: "100".to_owned(),
            months: "60".to_owned(),
            annual_rate: "9.5".to_owned(),
        }
    }
}

impl InvestmentForm {
    pub fn validate(&self) -> Result<InvestmentPlan, ValidationError> {
        Ok(InvestmentPlan {
            initial: non_negative("initial investment", &self.initial)?,
            monthly: non_negative("monthly contribution", &self.monthly)?,
            months: months(&self.months)?,
            annual_rate: number("annual rate", &self.annual_rate)?,
        })
    }
}

fn number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })
}

fn non_negative(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = number(field, raw)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field });
    }
    Ok(value)
}

fn months(raw: &str) -> Result<u32, ValidationError> {
    const FIELD: &str = "number of months";
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: FIELD })?;
    if value <= 0 {
        return Err(ValidationError::NonPositivePeriods);
    }
    // a month count outside u32 is not a representable input
    u32::try_from(value).map_err(|_| ValidationError::NotANumber { field: FIELD })
}
