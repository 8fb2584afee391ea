use super::frequency::CompoundingFrequency;
use crate::error::{Field, FieldIssue, Problem, ValidationError};
use serde::Serialize;

/// Validated inputs to the compound interest formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    compounds_per_year: CompoundingFrequency,
}

/// Outcome of a single calculation, in the currency unit of the principal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub principal: f64,
    pub total_interest: f64,
    pub total_amount: f64,
}

impl CalculationResult {
    /// False when the future value overflowed `f64`.
    pub fn is_finite(&self) -> bool {
        self.total_amount.is_finite() && self.total_interest.is_finite()
    }
}

/// Checks that a parsed field value is finite and strictly positive.
pub(crate) fn ensure_positive(field: Field, value: f64) -> Result<f64, FieldIssue> {
    if !value.is_finite() {
        Err(FieldIssue::new(field, Problem::NotFinite))
    } else if value <= 0.0 {
        Err(FieldIssue::new(field, Problem::NotPositive))
    } else {
        Ok(value)
    }
}

impl CalculationInput {
    /// Creates an input, rejecting any non-positive or non-finite field.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        compounds_per_year: CompoundingFrequency,
    ) -> Result<Self, ValidationError> {
        let checks = [
            ensure_positive(Field::Principal, principal),
            ensure_positive(Field::Rate, annual_rate_percent),
            ensure_positive(Field::Years, years),
        ];
        let issues: Vec<FieldIssue> = checks.into_iter().filter_map(Result::err).collect();
        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }
        Ok(Self::from_checked(
            principal,
            annual_rate_percent,
            years,
            compounds_per_year,
        ))
    }

    /// Builds an input from values already passed through `ensure_positive`.
    pub(crate) fn from_checked(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        compounds_per_year: CompoundingFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
            compounds_per_year,
        }
    }

    /// Applies `A = P(1 + r/n)^(nt)`.
    ///
    /// `total_amount` is rebuilt as `principal + total_interest` so the two
    /// derived figures always add up exactly.
    pub fn compound(&self) -> CalculationResult {
        let r = self.annual_rate_percent / 100.0;
        let n = f64::from(self.compounds_per_year.periods_per_year());
        let amount = self.principal * (1.0 + r / n).powf(n * self.years);
        let total_interest = amount - self.principal;

        CalculationResult {
            principal: self.principal,
            total_interest,
            total_amount: self.principal + total_interest,
        }
    }
}
