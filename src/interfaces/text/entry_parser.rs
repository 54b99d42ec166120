use crate::domain::campaign::{CampaignEntries, RawEntries};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses free-form numeric text.
///
/// Accepts an optional sign, an optional leading `$`, `,`/`_` digit grouping
/// and scientific notation. Scientific values too small to represent become
/// zero. Empty or unparsable text yields `None`, meaning "not entered yet".
pub fn parse_entry(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let unsigned = unsigned.trim_start();
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

    let digits: String = unsigned
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return None;
    }

    let value = match digits.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => match Decimal::from_scientific(&digits) {
            Ok(value) => value,
            // Finer than the smallest representable step.
            Err(_) if exponent.parse::<i64>().is_ok_and(|e| e < 0) => {
                Decimal::from_str(mantissa).ok().map(|_| Decimal::ZERO)?
            }
            Err(_) => return None,
        },
        None => Decimal::from_str(&digits).ok()?,
    };
    Some(if negative { -value } else { value })
}

/// Parses like [`parse_entry`], then floors to a whole unit and clamps at zero.
pub fn parse_whole_entry(text: &str) -> Option<Decimal> {
    parse_entry(text).map(|value| value.floor().max(Decimal::ZERO))
}

/// Parses all four fields, normalizing to whole units when requested.
pub fn parse_entries(raw: &RawEntries, whole_units: bool) -> CampaignEntries {
    let parse = if whole_units {
        parse_whole_entry
    } else {
        parse_entry
    };
    CampaignEntries {
        total_budget: parse(&raw.total_budget),
        total_days: parse(&raw.total_days),
        days_elapsed: parse(&raw.days_elapsed),
        amount_spent: parse(&raw.amount_spent),
    }
}
