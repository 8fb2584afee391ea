use super::engine::calculate;
use crate::domain::calculation::CalculationResult;
use crate::domain::frequency::CompoundingFrequency;
use crate::error::ValidationError;

pub const DEFAULT_PRINCIPAL: &str = "10000";
pub const DEFAULT_RATE: &str = "5";
pub const DEFAULT_YEARS: &str = "10";
pub const DEFAULT_FREQUENCY: CompoundingFrequency = CompoundingFrequency::Monthly;

/// The raw values currently entered in the calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub principal: String,
    pub rate: String,
    pub years: String,
    pub frequency: CompoundingFrequency,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL.to_string(),
            rate: DEFAULT_RATE.to_string(),
            years: DEFAULT_YEARS.to_string(),
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// What the result panel currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Valid(CalculationResult),
    Invalid(ValidationError),
}

/// Form state for one calculator session.
///
/// Only `submit` and `reset` move between states; editing inputs leaves the
/// last outcome on display until the next submit.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inputs: FormInputs,
    state: SessionState,
}

impl Session {
    /// Creates a session with the default inputs and nothing calculated yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut FormInputs {
        &mut self.inputs
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs the engine on the current inputs, replacing any previous outcome.
    pub fn submit(&mut self) -> &SessionState {
        self.state = match calculate(
            &self.inputs.principal,
            &self.inputs.rate,
            &self.inputs.years,
            self.inputs.frequency,
        ) {
            Ok(result) => SessionState::Valid(result),
            Err(err) => SessionState::Invalid(err),
        };
        &self.state
    }

    /// Restores the default inputs and clears any result or error.
    pub fn reset(&mut self) {
        self.inputs = FormInputs::default();
        self.state = SessionState::Idle;
    }
}
