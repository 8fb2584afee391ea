use clap::{Parser, Subcommand};
use compound_interest::application::engine::parse;
use compound_interest::application::session::{
    DEFAULT_FREQUENCY, DEFAULT_PRINCIPAL, DEFAULT_RATE, DEFAULT_YEARS, Session,
};
use compound_interest::domain::calculation::{CalculationInput, CalculationResult};
use compound_interest::domain::frequency::CompoundingFrequency;
use compound_interest::interfaces::console;
use compound_interest::interfaces::csv::result_writer::ResultWriter;
use compound_interest::interfaces::csv::scenario_reader::ScenarioReader;
use compound_interest::interfaces::render::render_result;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compound interest calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the future value of a single investment
    Calc {
        /// Principal amount ($)
        #[arg(long, default_value = DEFAULT_PRINCIPAL, allow_hyphen_values = true)]
        principal: String,

        /// Annual interest rate (%)
        #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
        rate: String,

        /// Time period in years
        #[arg(long, default_value = DEFAULT_YEARS, allow_hyphen_values = true)]
        years: String,

        /// Compounding frequency: annually, semi-annually, quarterly, monthly, daily (or 1, 2, 4, 12, 365)
        #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
        frequency: CompoundingFrequency,

        /// Print the inputs and result as JSON instead of a summary card
        #[arg(long)]
        json: bool,
    },
    /// Edit the inputs and recalculate from an interactive prompt
    Interactive,
    /// Evaluate every scenario in a CSV file (principal,rate,years,frequency)
    Batch {
        /// Input scenarios CSV file
        input: PathBuf,
    },
}

/// JSON body printed by `calc --json`. Overflowed amounts serialize as `null`.
#[derive(Serialize)]
struct CalcReport<'a> {
    input: &'a CalculationInput,
    result: &'a CalculationResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc {
            principal,
            rate,
            years,
            frequency,
            json,
        } => {
            let input = parse(&principal, &rate, &years, frequency)?;
            let result = input.compound();
            if !result.is_finite() {
                eprintln!("Warning: the future value is too large to represent");
            }
            if json {
                let report = CalcReport {
                    input: &input,
                    result: &result,
                };
                println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
            } else {
                print!("{}", render_result(&result));
            }
        }
        Command::Interactive => {
            let mut session = Session::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            console::run(&mut session, stdin.lock(), stdout.lock()).into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = ScenarioReader::new(file).into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock());

            for (index, scenario) in reader.scenarios() {
                match scenario.and_then(|scenario| scenario.evaluate()) {
                    Ok(result) => writer.write(index, &result).into_diagnostic()?,
                    Err(e) => eprintln!("Error in scenario {index}: {e}"),
                }
            }
            writer.finish().into_diagnostic()?;
        }
    }

    Ok(())
}
