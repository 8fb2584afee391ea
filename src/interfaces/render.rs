use super::chart::ProportionChart;
use super::currency::format_usd;
use crate::application::session::{FormInputs, SessionState};
use crate::domain::calculation::CalculationResult;
use crate::error::ValidationError;

const CHART_WIDTH: usize = 40;

/// Renders the "Future Value" card for a successful calculation.
pub fn render_result(result: &CalculationResult) -> String {
    let chart = ProportionChart::new(result);

    let mut lines = vec![
        "Future Value".to_string(),
        format_usd(result.total_amount),
        String::new(),
        chart.bar(CHART_WIDTH),
    ];
    lines.extend(chart.legend());
    lines.push(String::new());
    lines.push(format!(
        "{:<24}{:>18}",
        "Principal Amount",
        format_usd(result.principal)
    ));
    lines.push(format!(
        "{:<24}{:>18}",
        "Total Interest Earned",
        format_usd(result.total_interest)
    ));

    lines.join("\n") + "\n"
}

pub fn render_error(err: &ValidationError) -> String {
    format!("{err}\n")
}

pub fn render_idle() -> String {
    "Your results will be displayed here.\nEnter your investment details and run \"calc\".\n"
        .to_string()
}

pub fn render_state(state: &SessionState) -> String {
    match state {
        SessionState::Idle => render_idle(),
        SessionState::Valid(result) => render_result(result),
        SessionState::Invalid(err) => render_error(err),
    }
}

pub fn render_inputs(inputs: &FormInputs) -> String {
    format!(
        "Principal Amount ($):      {}\n\
         Annual Interest Rate (%):  {}\n\
         Time Period (Years):       {}\n\
         Compounding Frequency:     {}\n",
        inputs.principal, inputs.rate, inputs.years, inputs.frequency
    )
}
