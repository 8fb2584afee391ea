use crate::domain::calculation::CalculationResult;
use crate::error::Result;
use crate::interfaces::currency::to_cents;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Output row for one evaluated scenario, amounts rounded to cents.
#[derive(Debug, Serialize, PartialEq)]
pub struct ResultRecord {
    pub scenario: u64,
    pub principal: Option<Decimal>,
    pub total_interest: Option<Decimal>,
    pub total_amount: Option<Decimal>,
}

impl ResultRecord {
    /// Amounts too large for a `Decimal` are written as empty cells.
    pub fn new(scenario: u64, result: &CalculationResult) -> Self {
        Self {
            scenario,
            principal: to_cents(result.principal),
            total_interest: to_cents(result.total_interest),
            total_amount: to_cents(result.total_amount),
        }
    }
}

/// Writes evaluated scenarios as CSV.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, scenario: u64, result: &CalculationResult) -> Result<()> {
        self.writer.serialize(ResultRecord::new(scenario, result))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
