use super::campaign::{CampaignEntries, CampaignInputs, Field};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const INVALID_BUDGET: &str = "Please enter a valid budget greater than 0";
pub const INVALID_DURATION: &str = "Please enter a campaign duration of at least 1 whole day";
pub const INVALID_ELAPSED: &str = "Please enter days elapsed as a whole number of 0 or more";
pub const INVALID_SPENT: &str = "Please enter amount spent of 0 or more";
pub const ELAPSED_EXCEEDS_DURATION: &str = "Days Elapsed can't exceed Duration";
pub const SPENT_EXCEEDS_BUDGET: &str = "Amount Spent can't exceed Budget";

/// Field-level validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    // First failure wins.
    fn reject(&mut self, field: Field, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

fn whole_days(value: Decimal) -> Option<u32> {
    if value.fract().is_zero() {
        value.to_u32()
    } else {
        None
    }
}

/// Validates parsed entries, returning the typed inputs or every failing field.
///
/// Each field is checked for presence and sign first. The cross-field checks
/// (elapsed against duration, spent against budget) only run when both fields
/// involved passed their own checks.
pub fn validate(entries: &CampaignEntries) -> Result<CampaignInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let budget = entries.total_budget.filter(|b| *b > Decimal::ZERO);
    if budget.is_none() {
        errors.reject(Field::TotalBudget, INVALID_BUDGET);
    }

    let duration = entries
        .total_days
        .and_then(whole_days)
        .filter(|days| *days > 0);
    if duration.is_none() {
        errors.reject(Field::TotalDays, INVALID_DURATION);
    }

    let elapsed = entries.days_elapsed.and_then(whole_days);
    if elapsed.is_none() {
        errors.reject(Field::DaysElapsed, INVALID_ELAPSED);
    }

    let spent = entries.amount_spent.filter(|s| *s >= Decimal::ZERO);
    if spent.is_none() {
        errors.reject(Field::AmountSpent, INVALID_SPENT);
    }

    if let (Some(duration), Some(elapsed)) = (duration, elapsed)
        && elapsed > duration
    {
        errors.reject(Field::DaysElapsed, ELAPSED_EXCEEDS_DURATION);
    }

    if let (Some(budget), Some(spent)) = (budget, spent)
        && spent > budget
    {
        errors.reject(Field::AmountSpent, SPENT_EXCEEDS_BUDGET);
    }

    match (budget, duration, elapsed, spent) {
        (Some(budget), Some(duration), Some(elapsed), Some(spent)) if errors.is_empty() => Ok(
            CampaignInputs::new_unchecked(budget, duration, elapsed, spent),
        ),
        _ => Err(errors),
    }
}
