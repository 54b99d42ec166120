use crate::domain::campaign::RawEntries;
use crate::error::{PacingError, Result};
use serde::Deserialize;
use std::io::Read;

/// One campaign row of a batch file. Numeric columns are kept as text so they
/// go through the same permissive parsing as interactive entry.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct CampaignRecord {
    pub name: String,
    pub total_budget: String,
    pub total_days: String,
    pub days_elapsed: String,
    pub amount_spent: String,
}

impl CampaignRecord {
    pub fn entries(&self) -> RawEntries {
        RawEntries::new(
            self.total_budget.as_str(),
            self.total_days.as_str(),
            self.days_elapsed.as_str(),
            self.amount_spent.as_str(),
        )
    }
}

/// Reads campaign records from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so a short row surfaces as missing entries instead of a read error.
pub struct CampaignReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CampaignReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes records.
    pub fn campaigns(self) -> impl Iterator<Item = Result<CampaignRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PacingError::from))
    }
}
