use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four values a user enters to describe a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    TotalBudget,
    TotalDays,
    DaysElapsed,
    AmountSpent,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::TotalBudget,
        Field::TotalDays,
        Field::DaysElapsed,
        Field::AmountSpent,
    ];

    /// Stable key used in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::TotalBudget => "totalBudget",
            Field::TotalDays => "totalDays",
            Field::DaysElapsed => "daysElapsed",
            Field::AmountSpent => "amountSpent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::TotalBudget => "Total Budget",
            Field::TotalDays => "Campaign Duration (Days)",
            Field::DaysElapsed => "Days Elapsed",
            Field::AmountSpent => "Amount Spent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text exactly as entered, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEntries {
    pub total_budget: String,
    pub total_days: String,
    pub days_elapsed: String,
    pub amount_spent: String,
}

impl RawEntries {
    pub fn new(
        total_budget: impl Into<String>,
        total_days: impl Into<String>,
        days_elapsed: impl Into<String>,
        amount_spent: impl Into<String>,
    ) -> Self {
        Self {
            total_budget: total_budget.into(),
            total_days: total_days.into(),
            days_elapsed: days_elapsed.into(),
            amount_spent: amount_spent.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TotalBudget => &self.total_budget,
            Field::TotalDays => &self.total_days,
            Field::DaysElapsed => &self.days_elapsed,
            Field::AmountSpent => &self.amount_spent,
        }
    }

    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::TotalBudget => self.total_budget = text,
            Field::TotalDays => self.total_days = text,
            Field::DaysElapsed => self.days_elapsed = text,
            Field::AmountSpent => self.amount_spent = text,
        }
    }
}

/// Parsed but unvalidated entries. `None` marks a field that is not present,
/// either empty or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CampaignEntries {
    pub total_budget: Option<Decimal>,
    pub total_days: Option<Decimal>,
    pub days_elapsed: Option<Decimal>,
    pub amount_spent: Option<Decimal>,
}

/// Inputs that have passed validation.
///
/// The only way to obtain one outside this crate is through
/// [`validate`](crate::domain::validation::validate), so every
/// [`PacingResult`](crate::domain::pacing::PacingResult) is derived from a
/// consistent set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampaignInputs {
    total_budget: Decimal,
    total_days: u32,
    days_elapsed: u32,
    amount_spent: Decimal,
}

impl CampaignInputs {
    pub(crate) fn new_unchecked(
        total_budget: Decimal,
        total_days: u32,
        days_elapsed: u32,
        amount_spent: Decimal,
    ) -> Self {
        Self {
            total_budget,
            total_days,
            days_elapsed,
            amount_spent,
        }
    }

    pub fn total_budget(&self) -> Decimal {
        self.total_budget
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    pub fn amount_spent(&self) -> Decimal {
        self.amount_spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_camel_case() {
        let keys: Vec<&str> = Field::ALL.iter().map(Field::key).collect();
        assert_eq!(
            keys,
            vec!["totalBudget", "totalDays", "daysElapsed", "amountSpent"]
        );
        assert_eq!(
            serde_json::to_string(&Field::DaysElapsed).unwrap(),
            "\"daysElapsed\""
        );
    }

    #[test]
    fn test_raw_entries_set_and_get() {
        let mut raw = RawEntries::default();
        raw.set(Field::AmountSpent, "250".to_string());
        assert_eq!(raw.get(Field::AmountSpent), "250");
        assert_eq!(raw.get(Field::TotalBudget), "");
    }
}
