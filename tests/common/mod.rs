use campaign_pacing::interfaces::text::entry_parser::parse_entries;
use campaign_pacing::{PacingEngine, PacingResult, RawEntries, ValidationErrors};
use std::io::Error;
use std::path::Path;

#[allow(dead_code)]
pub fn evaluate(
    budget: &str,
    days: &str,
    elapsed: &str,
    spent: &str,
) -> Result<PacingResult, ValidationErrors> {
    let raw = RawEntries::new(budget, days, elapsed, spent);
    PacingEngine::new().evaluate(&parse_entries(&raw, false))
}

#[allow(dead_code)]
pub fn write_campaigns(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record([
        "name",
        "total_budget",
        "total_days",
        "days_elapsed",
        "amount_spent",
    ])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
