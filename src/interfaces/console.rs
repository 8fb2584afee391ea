use super::render::{render_inputs, render_state};
use crate::application::session::{Session, SessionState};
use crate::domain::frequency::CompoundingFrequency;
use crate::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  principal <amount>    set the principal amount ($)
  rate <percent>        set the annual interest rate (%)
  years <years>         set the time period in years
  frequency <value>     annually, semi-annually, quarterly, monthly, daily (or 1, 2, 4, 12, 365)
  calc                  calculate with the current inputs
  reset                 restore the default inputs and clear the result
  show                  print the current inputs and result
  help                  print this help
  quit                  leave the calculator
";

/// Drives a calculator session from line-oriented commands.
///
/// Reads until `quit`/`exit` or end of input. Bad commands and invalid
/// frequencies are reported on `output` and the session carries on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(output, "Compound Interest Calculator")?;
    writeln!(output, "Type \"help\" for a list of commands.")?;
    write!(output, "{}", render_inputs(session.inputs()))?;

    for line in input.lines() {
        let line = line?;
        let (command, argument) = match line.trim().split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => continue,
            "principal" => session.inputs_mut().principal = argument.to_string(),
            "rate" => session.inputs_mut().rate = argument.to_string(),
            "years" => session.inputs_mut().years = argument.to_string(),
            "frequency" => match argument.parse::<CompoundingFrequency>() {
                Ok(frequency) => session.inputs_mut().frequency = frequency,
                Err(e) => writeln!(output, "{e}")?,
            },
            "calc" | "calculate" => write_state(&mut output, session.submit())?,
            "reset" => {
                session.reset();
                writeln!(output, "Inputs reset to defaults.")?;
                write!(output, "{}", render_inputs(session.inputs()))?;
            }
            "show" => {
                write!(output, "{}", render_inputs(session.inputs()))?;
                write_state(&mut output, session.state())?;
            }
            "help" => write!(output, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(
                output,
                "Unknown command: {other}. Type \"help\" for a list of commands."
            )?,
        }
        output.flush()?;
    }

    Ok(())
}

/// Writes the result panel, followed by the field issues when invalid.
fn write_state<W: Write>(output: &mut W, state: &SessionState) -> Result<()> {
    write!(output, "{}", render_state(state))?;
    if let SessionState::Invalid(err) = state {
        for issue in err.issues() {
            writeln!(output, "  - {issue}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_calculate_with_defaults() {
        let mut session = Session::new();
        let out = drive(&mut session, "calc\n");
        assert!(out.contains("$16,470.09"));
        assert!(matches!(session.state(), SessionState::Valid(_)));
    }

    #[test]
    fn test_edit_then_calculate() {
        let mut session = Session::new();
        let out = drive(
            &mut session,
            "principal 1000\nrate 10\nyears 1\nfrequency annually\ncalc\n",
        );
        assert!(out.contains("Future Value\n$1,100.00"));
        assert!(out.contains("$100.00"));
    }

    #[test]
    fn test_invalid_input_lists_fields() {
        let mut session = Session::new();
        let out = drive(&mut session, "principal 5000\nrate 0\ncalc\n");
        assert!(out.contains("Please enter valid positive numbers for all fields."));
        assert!(out.contains("  - rate must be greater than zero"));
        assert!(!out.contains("Future Value"));
    }

    #[test]
    fn test_show_lists_issues_like_calc() {
        let mut session = Session::new();
        let out = drive(&mut session, "years -2\ncalc\nshow\n");
        assert_eq!(out.matches("  - years must be greater than zero").count(), 2);
        assert_eq!(
            out.matches("Please enter valid positive numbers for all fields.").count(),
            2
        );
    }

    #[test]
    fn test_empty_principal_is_invalid() {
        let mut session = Session::new();
        let out = drive(&mut session, "principal\ncalc\n");
        assert!(out.contains("  - principal is not a number"));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = Session::new();
        let out = drive(&mut session, "years abc\ncalc\nreset\nshow\n");
        assert!(out.contains("Inputs reset to defaults."));
        assert!(out.contains("Your results will be displayed here."));
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.inputs().years, "10");
    }

    #[test]
    fn test_unknown_command_and_bad_frequency() {
        let mut session = Session::new();
        let out = drive(&mut session, "fly\nfrequency weekly\nquit\ncalc\n");
        assert!(out.contains("Unknown command: fly."));
        assert!(out.contains("Unsupported compounding frequency: weekly"));
        // Nothing after quit is processed
        assert_eq!(session.state(), &SessionState::Idle);
    }
}
