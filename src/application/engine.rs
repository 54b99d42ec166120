use crate::domain::campaign::{CampaignEntries, CampaignInputs};
use crate::domain::pacing::{BandPolicy, PacingResult};
use crate::domain::validation::{self, ValidationErrors};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::trace;

const HUNDRED: Decimal = dec!(100);

/// Validates campaign entries and derives linear-pacing metrics.
///
/// `PacingEngine` holds nothing but its banding thresholds, so every call is
/// independent and the engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PacingEngine {
    policy: BandPolicy,
}

impl PacingEngine {
    /// Creates an engine with the default bands (5% on track, 20% escalation).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BandPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BandPolicy {
        self.policy
    }

    /// Checks the entries against the field rules. See [`validation::validate`].
    pub fn validate(&self, entries: &CampaignEntries) -> Result<CampaignInputs, ValidationErrors> {
        validation::validate(entries)
    }

    /// Computes the pacing metrics for validated inputs.
    ///
    /// Values are returned unrounded; rounding is a display concern.
    pub fn compute(&self, inputs: &CampaignInputs) -> PacingResult {
        let budget = inputs.total_budget();
        let spent = inputs.amount_spent();
        let total_days = Decimal::from(inputs.total_days());
        let elapsed = Decimal::from(inputs.days_elapsed());

        // Multiply first: elapsed / total_days may not terminate.
        let target_spend = budget
            .checked_mul(elapsed)
            .map(|scaled| scaled / total_days)
            .unwrap_or_else(|| elapsed / total_days * budget);
        let spend_variance = spent - target_spend;
        let percent_of_budget_spent = spent / budget * HUNDRED;
        let daily_budget = budget / total_days;
        let remaining_budget = budget - spent;
        let days_remaining = inputs.total_days().saturating_sub(inputs.days_elapsed());
        let recommended_daily = if days_remaining > 0 {
            remaining_budget / Decimal::from(days_remaining)
        } else {
            Decimal::ZERO
        };
        let variance_percent = if target_spend.is_zero() {
            Decimal::ZERO
        } else if let (Some(actual), Some(planned)) =
            (spent.checked_mul(total_days), budget.checked_mul(elapsed))
        {
            (actual - planned) / planned * HUNDRED
        } else {
            spend_variance / target_spend * HUNDRED
        };
        let status = self.policy.classify(variance_percent);

        trace!(%target_spend, %spend_variance, %variance_percent, ?status, "computed pacing");

        PacingResult {
            target_spend,
            spend_variance,
            variance_percent,
            percent_of_budget_spent,
            daily_budget,
            remaining_budget,
            days_remaining,
            recommended_daily,
            status,
        }
    }

    /// Validates and, if the entries pass, computes.
    pub fn evaluate(&self, entries: &CampaignEntries) -> Result<PacingResult, ValidationErrors> {
        let inputs = self.validate(entries)?;
        Ok(self.compute(&inputs))
    }
}
