use crate::domain::options::DisplayOptions;
use crate::domain::pacing::{PacingResult, PacingStatus, Severity};
use crate::error::Result;
use crate::interfaces::display::currency::round_for_display;
use crate::interfaces::display::view::status_label;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    status: PacingStatus,
    label: String,
    severity: Severity,
    expected_spend: Decimal,
    spend_variance: Decimal,
    variance_percent: Decimal,
    percent_spent: Decimal,
    daily_budget: Decimal,
    remaining_budget: Decimal,
    recommended_daily: Decimal,
    days_remaining: u32,
}

/// Writes one CSV row per evaluated campaign.
///
/// Amounts are rounded to the configured precision but carry no currency
/// symbol or grouping, so the output stays machine readable.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    decimals: u32,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(destination: W, options: &DisplayOptions) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
            decimals: options.decimals(),
        }
    }

    pub fn write_result(&mut self, name: &str, result: &PacingResult) -> Result<()> {
        let money = |value| round_for_display(value, self.decimals);
        self.writer.serialize(ReportRow {
            name,
            status: result.status,
            label: status_label(result),
            severity: result.status.severity(),
            expected_spend: money(result.target_spend),
            spend_variance: money(result.spend_variance),
            variance_percent: round_for_display(result.variance_percent, 2),
            percent_spent: round_for_display(result.percent_of_budget_spent, 2),
            daily_budget: money(result.daily_budget),
            remaining_budget: money(result.remaining_budget),
            recommended_daily: money(result.recommended_daily),
            days_remaining: result.days_remaining,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::PacingEngine;
    use crate::domain::campaign::CampaignEntries;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_result() {
        let result = PacingEngine::new()
            .evaluate(&CampaignEntries {
                total_budget: Some(dec!(10000)),
                total_days: Some(dec!(30)),
                days_elapsed: Some(dec!(15)),
                amount_spent: Some(dec!(7000)),
            })
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buffer, &DisplayOptions::default());
            writer.write_result("spring", &result).unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();

        assert_eq!(
            lines.next().unwrap(),
            "name,status,label,severity,expected_spend,spend_variance,variance_percent,\
             percent_spent,daily_budget,remaining_budget,recommended_daily,days_remaining"
        );
        assert_eq!(
            lines.next().unwrap(),
            "spring,overPaceDanger,40% Over Pace,danger,5000,2000,40.00,70.00,333,3000,200,15"
        );
    }
}
