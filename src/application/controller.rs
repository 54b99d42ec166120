use crate::application::engine::PacingEngine;
use crate::domain::campaign::{CampaignEntries, Field, RawEntries};
use crate::domain::options::DisplayOptions;
use crate::domain::pacing::PacingResult;
use crate::domain::validation::ValidationErrors;
use crate::interfaces::display::view::PacingView;
use crate::interfaces::text::entry_parser::{parse_entries, parse_whole_entry};
use tracing::{debug, info};

/// Drives a single calculator form: entered text, field errors and the last
/// result.
///
/// Editing a field re-validates immediately but never computes. A result is
/// only produced by [`calculate`](Self::calculate). A failed calculation
/// clears the previous result; an edit leaves it in place until the next
/// calculation.
#[derive(Debug, Clone)]
pub struct PacingController {
    engine: PacingEngine,
    options: DisplayOptions,
    raw: RawEntries,
    errors: ValidationErrors,
    result: Option<PacingResult>,
}

impl PacingController {
    pub fn new(engine: PacingEngine, options: DisplayOptions) -> Self {
        Self {
            engine,
            options,
            raw: RawEntries::default(),
            errors: ValidationErrors::default(),
            result: None,
        }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn entries(&self) -> &RawEntries {
        &self.raw
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn result(&self) -> Option<&PacingResult> {
        self.result.as_ref()
    }

    /// Stores the text for `field` and refreshes the field errors.
    ///
    /// With whole-unit display the text is normalized first, so `"99.9"`
    /// is stored as `"99"` and negative values become `"0"`.
    pub fn set_field(&mut self, field: Field, text: &str) {
        let text = if self.options.whole_units() {
            parse_whole_entry(text)
                .map(|value| value.normalize().to_string())
                .unwrap_or_default()
        } else {
            text.trim().to_string()
        };
        debug!(%field, text = %text, "field updated");
        self.raw.set(field, text);
        self.errors = match self.engine.validate(&self.parsed()) {
            Ok(_) => ValidationErrors::default(),
            Err(errors) => errors,
        };
    }

    /// Validates the current entries and, if they pass, replaces the result.
    pub fn calculate(&mut self) -> Result<&PacingResult, &ValidationErrors> {
        match self.engine.evaluate(&self.parsed()) {
            Ok(result) => {
                info!(status = ?result.status, "pacing calculated");
                self.errors = ValidationErrors::default();
                Ok(self.result.insert(result))
            }
            Err(errors) => {
                debug!(%errors, "calculation rejected");
                self.errors = errors;
                self.result = None;
                Err(&self.errors)
            }
        }
    }

    /// Resets every field, error and result.
    pub fn clear(&mut self) {
        self.raw = RawEntries::default();
        self.errors = ValidationErrors::default();
        self.result = None;
    }

    /// Presentation model of the current result, if one exists.
    pub fn view(&self) -> Option<PacingView> {
        self.result
            .as_ref()
            .map(|result| PacingView::new(result, &self.options))
    }

    fn parsed(&self) -> CampaignEntries {
        parse_entries(&self.raw, self.options.whole_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pacing::PacingStatus;
    use crate::domain::validation::{ELAPSED_EXCEEDS_DURATION, INVALID_DURATION};
    use rust_decimal_macros::dec;

    fn controller() -> PacingController {
        PacingController::new(PacingEngine::new(), DisplayOptions::default())
    }

    fn fill(controller: &mut PacingController, values: [&str; 4]) {
        for (field, value) in Field::ALL.into_iter().zip(values) {
            controller.set_field(field, value);
        }
    }

    #[test]
    fn test_calculate_success() {
        let mut c = controller();
        fill(&mut c, ["10000", "30", "15", "5500"]);
        assert!(c.errors().is_empty());
        assert!(c.result().is_none());

        let result = c.calculate().unwrap();
        assert_eq!(result.target_spend, dec!(5000));
        assert_eq!(result.status, PacingStatus::OverPaceWarn);
        assert!(c.view().is_some());
    }

    #[test]
    fn test_realtime_validation_on_edit() {
        let mut c = controller();
        c.set_field(Field::TotalBudget, "1000");
        assert!(c.errors().contains(Field::TotalDays));
        c.set_field(Field::TotalDays, "0");
        assert_eq!(c.errors().get(Field::TotalDays), Some(INVALID_DURATION));
    }

    #[test]
    fn test_whole_unit_normalization() {
        let mut c = controller();
        c.set_field(Field::TotalBudget, "1500.75");
        c.set_field(Field::AmountSpent, "-20");
        c.set_field(Field::TotalDays, "abc");
        assert_eq!(c.entries().total_budget, "1500");
        assert_eq!(c.entries().amount_spent, "0");
        assert_eq!(c.entries().total_days, "");
    }

    #[test]
    fn test_fractional_entries_kept_with_decimals() {
        let mut c = PacingController::new(PacingEngine::new(), DisplayOptions::new("USD", 2));
        fill(&mut c, ["1000.50", "10", "5", "250.25"]);
        let result = c.calculate().unwrap();
        assert_eq!(result.target_spend, dec!(500.25));
    }

    #[test]
    fn test_failed_calculate_clears_result() {
        let mut c = controller();
        fill(&mut c, ["10000", "30", "15", "5500"]);
        c.calculate().unwrap();

        c.set_field(Field::DaysElapsed, "40");
        // Edits leave the previous result in place.
        assert!(c.result().is_some());
        assert_eq!(
            c.errors().get(Field::DaysElapsed),
            Some(ELAPSED_EXCEEDS_DURATION)
        );

        let errors = c.calculate().unwrap_err();
        assert!(errors.contains(Field::DaysElapsed));
        assert!(c.result().is_none());
        assert!(c.view().is_none());
    }

    #[test]
    fn test_successful_calculate_replaces_result() {
        let mut c = controller();
        fill(&mut c, ["10000", "30", "15", "5500"]);
        c.calculate().unwrap();
        c.set_field(Field::AmountSpent, "2000");
        let result = c.calculate().unwrap();
        assert_eq!(result.status, PacingStatus::UnderPaceWarn);
    }

    #[test]
    fn test_clear() {
        let mut c = controller();
        fill(&mut c, ["10000", "30", "15", "5500"]);
        c.calculate().unwrap();
        c.clear();
        assert_eq!(c.entries(), &RawEntries::default());
        assert!(c.errors().is_empty());
        assert!(c.result().is_none());
    }
}
