use std::io::Error;
use std::path::Path;

/// Writes a scenarios CSV with the standard header followed by `rows`.
pub fn write_scenarios(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["principal", "rate", "years", "frequency"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
