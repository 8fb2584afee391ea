use crate::domain::calculation::{CalculationInput, CalculationResult, ensure_positive};
use crate::domain::frequency::CompoundingFrequency;
use crate::error::{Field, FieldIssue, Problem, ValidationError};

/// Validates raw form text and computes the compounded result.
///
/// Principal, rate (as a percentage) and years arrive as the text typed into
/// the form. Every field is checked before anything is computed, and a failure
/// in any of them yields a single `ValidationError` listing all offending
/// fields.
///
/// # Examples
///
/// ```
/// use compound_interest::application::engine::calculate;
/// use compound_interest::domain::frequency::CompoundingFrequency;
///
/// let result = calculate("1000", "10", "1", CompoundingFrequency::Annually).unwrap();
/// assert!((result.total_amount - 1100.0).abs() < 1e-9);
/// ```
pub fn calculate(
    principal_raw: &str,
    rate_raw: &str,
    years_raw: &str,
    compounds_per_year: CompoundingFrequency,
) -> Result<CalculationResult, ValidationError> {
    parse(principal_raw, rate_raw, years_raw, compounds_per_year).map(|input| input.compound())
}

/// Validates raw form text into a `CalculationInput` without computing.
pub fn parse(
    principal_raw: &str,
    rate_raw: &str,
    years_raw: &str,
    compounds_per_year: CompoundingFrequency,
) -> Result<CalculationInput, ValidationError> {
    let principal = parse_field(Field::Principal, principal_raw);
    let rate = parse_field(Field::Rate, rate_raw);
    let years = parse_field(Field::Years, years_raw);

    match (principal, rate, years) {
        (Ok(principal), Ok(rate), Ok(years)) => Ok(CalculationInput::from_checked(
            principal,
            rate,
            years,
            compounds_per_year,
        )),
        (principal, rate, years) => Err(ValidationError::new(
            [principal.err(), rate.err(), years.err()]
                .into_iter()
                .flatten()
                .collect(),
        )),
    }
}

fn parse_field(field: Field, raw: &str) -> Result<f64, FieldIssue> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| FieldIssue::new(field, Problem::Unparseable))?;
    ensure_positive(field, value)
}
