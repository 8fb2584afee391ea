use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Message shown whenever any calculator field fails validation.
pub const VALIDATION_MESSAGE: &str = "Please enter valid positive numbers for all fields.";

#[derive(Error, Debug)]
pub enum InterestError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Unsupported compounding frequency: {0}")]
    UnsupportedFrequency(String),
    #[error("Missing CSV columns: {0}")]
    MissingColumns(String),
}

pub type Result<T> = std::result::Result<T, InterestError>;

/// A numeric form field checked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Rate,
    Years,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Principal => "principal",
            Field::Rate => "rate",
            Field::Years => "years",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Unparseable,
    NotFinite,
    NotPositive,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Problem::Unparseable => "is not a number",
            Problem::NotFinite => "must be a finite number",
            Problem::NotPositive => "must be greater than zero",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub problem: Problem,
}

impl FieldIssue {
    pub fn new(field: Field, problem: Problem) -> Self {
        Self { field, problem }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.problem)
    }
}

/// Rejection of calculator input.
///
/// Displays the same generic form message whatever went wrong. The individual
/// field issues are kept in field order for callers that point at inputs.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("{}", VALIDATION_MESSAGE)]
#[diagnostic(
    code(compound_interest::validation),
    help("principal, rate and years must all be numbers greater than zero")
)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns true if the given field contributed to the rejection.
    pub fn concerns(&self, field: Field) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}
