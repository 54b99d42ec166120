use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Coarse pacing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PacingDirection {
    OnPace,
    Overpacing,
    Underpacing,
}

impl PacingDirection {
    pub fn label(&self) -> &'static str {
        match self {
            PacingDirection::OnPace => "On Pace",
            PacingDirection::Overpacing => "Overpacing",
            PacingDirection::Underpacing => "Underpacing",
        }
    }
}

/// Display severity attached to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Danger => "danger",
        }
    }
}

/// Fine-grained pacing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PacingStatus {
    OnTrack,
    OverPaceWarn,
    OverPaceDanger,
    UnderPaceWarn,
    UnderPaceOk,
}

impl PacingStatus {
    pub fn direction(&self) -> PacingDirection {
        match self {
            PacingStatus::OnTrack => PacingDirection::OnPace,
            PacingStatus::OverPaceWarn | PacingStatus::OverPaceDanger => {
                PacingDirection::Overpacing
            }
            PacingStatus::UnderPaceWarn | PacingStatus::UnderPaceOk => {
                PacingDirection::Underpacing
            }
        }
    }

    /// Under-pacing is only flagged once it passes the escalation threshold;
    /// over-pacing is always at least a warning.
    pub fn severity(&self) -> Severity {
        match self {
            PacingStatus::OnTrack | PacingStatus::UnderPaceOk => Severity::Ok,
            PacingStatus::OverPaceWarn | PacingStatus::UnderPaceWarn => Severity::Warn,
            PacingStatus::OverPaceDanger => Severity::Danger,
        }
    }
}

/// Variance thresholds, in percent of target spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandPolicy {
    /// Variance strictly inside `±on_track` is on track.
    pub on_track: Decimal,
    /// Variance strictly beyond `±escalation` escalates severity.
    pub escalation: Decimal,
}

impl Default for BandPolicy {
    fn default() -> Self {
        Self {
            on_track: dec!(5),
            escalation: dec!(20),
        }
    }
}

impl BandPolicy {
    pub fn classify(&self, variance_percent: Decimal) -> PacingStatus {
        if variance_percent.abs() < self.on_track {
            PacingStatus::OnTrack
        } else if variance_percent > Decimal::ZERO {
            if variance_percent > self.escalation {
                PacingStatus::OverPaceDanger
            } else {
                PacingStatus::OverPaceWarn
            }
        } else if variance_percent < -self.escalation {
            PacingStatus::UnderPaceWarn
        } else {
            PacingStatus::UnderPaceOk
        }
    }
}

/// Pacing metrics derived from validated inputs, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingResult {
    pub target_spend: Decimal,
    pub spend_variance: Decimal,
    pub variance_percent: Decimal,
    pub percent_of_budget_spent: Decimal,
    pub daily_budget: Decimal,
    pub remaining_budget: Decimal,
    pub days_remaining: u32,
    pub recommended_daily: Decimal,
    pub status: PacingStatus,
}

impl PacingResult {
    pub fn direction(&self) -> PacingDirection {
        self.status.direction()
    }
}
