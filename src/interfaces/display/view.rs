use super::currency::{CurrencyFormatter, format_percent, round_for_display};
use crate::domain::options::DisplayOptions;
use crate::domain::pacing::{PacingDirection, PacingResult, PacingStatus, Severity};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A [`PacingResult`] rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingView {
    pub status: PacingStatus,
    pub direction: PacingDirection,
    /// e.g. "On Track", "12% Over Pace".
    pub status_label: String,
    pub severity: Severity,
    pub expected_spend: String,
    pub spend_variance: String,
    pub daily_budget: String,
    pub remaining_budget: String,
    pub recommended_daily: String,
    pub days_remaining: u32,
    /// Whole percent of budget spent, e.g. "55%". May exceed 100.
    pub percent_spent: String,
    /// Percent spent clamped to `0..=100` for a progress bar.
    pub progress: Decimal,
}

impl PacingView {
    pub fn new(result: &PacingResult, options: &DisplayOptions) -> Self {
        let money = CurrencyFormatter::new(options);
        Self {
            status: result.status,
            direction: result.direction(),
            status_label: status_label(result),
            severity: result.status.severity(),
            expected_spend: money.format(result.target_spend),
            spend_variance: money.format(result.spend_variance),
            daily_budget: money.format(result.daily_budget),
            remaining_budget: money.format(result.remaining_budget),
            recommended_daily: money.format(result.recommended_daily),
            days_remaining: result.days_remaining,
            percent_spent: format_percent(result.percent_of_budget_spent),
            progress: progress(result.percent_of_budget_spent),
        }
    }
}

pub fn status_label(result: &PacingResult) -> String {
    let percent = round_for_display(result.variance_percent.abs(), 0);
    match result.direction() {
        PacingDirection::OnPace => "On Track".to_string(),
        PacingDirection::Overpacing => format!("{}% Over Pace", percent),
        PacingDirection::Underpacing => format!("{}% Under Pace", percent),
    }
}

pub fn progress(percent: Decimal) -> Decimal {
    round_for_display(percent.clamp(Decimal::ZERO, dec!(100)), 2)
}
