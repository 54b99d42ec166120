use crate::domain::validation::ValidationErrors;
use crate::interfaces::display::view::PacingView;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const BAR_WIDTH: usize = 20;

fn progress_bar(progress: Decimal) -> String {
    let filled = (progress / dec!(100) * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Renders a result panel for the terminal.
pub fn render_view(view: &PacingView) -> String {
    let rows = [
        ("Pacing Status", format!("{} ({})", view.status_label, view.severity.as_str())),
        ("Expected Spend by Now", view.expected_spend.clone()),
        ("Spend Variance", view.spend_variance.clone()),
        ("Daily Budget", view.daily_budget.clone()),
        ("Remaining Budget", view.remaining_budget.clone()),
        ("Recommended Daily Spend", view.recommended_daily.clone()),
        ("Days Remaining", view.days_remaining.to_string()),
    ];
    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("{:<24} {}", label, value))
        .collect();
    lines.push(format!(
        "{} {} of Budget Spent",
        progress_bar(view.progress),
        view.percent_spent
    ));
    lines.join("\n") + "\n"
}

/// Renders one line per rejected field, naming the field and the constraint.
pub fn render_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}\n", field.label(), message))
        .collect()
}
