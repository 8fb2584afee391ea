use crate::application::engine::calculate;
use crate::domain::calculation::CalculationResult;
use crate::domain::frequency::CompoundingFrequency;
use crate::error::{InterestError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch file, kept as the raw text a user would type.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Scenario {
    pub principal: String,
    pub rate: String,
    pub years: String,
    pub frequency: String,
}

impl Scenario {
    /// Runs the scenario through the engine.
    pub fn evaluate(&self) -> Result<CalculationResult> {
        let frequency: CompoundingFrequency = self.frequency.parse()?;
        Ok(calculate(&self.principal, &self.rate, &self.years, frequency)?)
    }
}

/// Columns every batch file must name in its header.
pub const COLUMNS: [&str; 4] = ["principal", "rate", "years", "frequency"];

/// Reads scenarios from a CSV source with a `principal,rate,years,frequency` header.
///
/// Whitespace is trimmed and short rows are accepted; missing cells become
/// empty text and fail validation later. The header itself must name every
/// column, in any order.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?;
        let missing: Vec<&str> = COLUMNS
            .into_iter()
            .filter(|column| !headers.iter().any(|header| header == *column))
            .collect();
        if !missing.is_empty() {
            return Err(InterestError::MissingColumns(missing.join(", ")));
        }

        Ok(Self { reader })
    }

    /// Lazily yields each scenario with its 1-based position in the file.
    pub fn scenarios(self) -> impl Iterator<Item = (u64, Result<Scenario>)> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InterestError::from))
            .zip(1..)
            .map(|(result, index)| (index, result))
    }
}
