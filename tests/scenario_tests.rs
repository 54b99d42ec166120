mod common;

use campaign_pacing::domain::validation::{ELAPSED_EXCEEDS_DURATION, INVALID_DURATION};
use campaign_pacing::{Field, PacingDirection, PacingStatus};
use common::evaluate;
use rust_decimal_macros::dec;

#[test]
fn test_slightly_over_target() {
    let result = evaluate("10000", "30", "15", "5500").unwrap();
    assert_eq!(result.target_spend, dec!(5000));
    assert_eq!(result.spend_variance, dec!(500));
    assert_eq!(result.percent_of_budget_spent, dec!(55));
    // 10% over target is outside the 5% band.
    assert_eq!(result.status, PacingStatus::OverPaceWarn);
    assert_eq!(result.direction(), PacingDirection::Overpacing);
}

#[test]
fn test_far_over_target() {
    let result = evaluate("10000", "30", "15", "7000").unwrap();
    assert_eq!(result.target_spend, dec!(5000));
    assert_eq!(result.spend_variance, dec!(2000));
    assert_eq!(result.status, PacingStatus::OverPaceDanger);
}

#[test]
fn test_far_under_target() {
    let result = evaluate("10000", "30", "15", "2000").unwrap();
    assert_eq!(result.target_spend, dec!(5000));
    assert_eq!(result.spend_variance, dec!(-3000));
    assert_eq!(result.direction(), PacingDirection::Underpacing);
    assert_eq!(result.status, PacingStatus::UnderPaceWarn);
}

#[test]
fn test_zero_duration_rejected() {
    let errors = evaluate("10000", "0", "0", "0").unwrap_err();
    assert_eq!(errors.get(Field::TotalDays), Some(INVALID_DURATION));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_negative_duration_rejected() {
    let errors = evaluate("10000", "-30", "0", "0").unwrap_err();
    assert_eq!(errors.get(Field::TotalDays), Some(INVALID_DURATION));
}

#[test]
fn test_elapsed_past_duration_rejected() {
    let errors = evaluate("10000", "30", "40", "100").unwrap_err();
    assert_eq!(
        errors.get(Field::DaysElapsed),
        Some(ELAPSED_EXCEEDS_DURATION)
    );
    assert!(errors.get(Field::DaysElapsed).unwrap().contains("exceed"));
}

#[test]
fn test_overspend_rejected() {
    let errors = evaluate("10000", "30", "10", "10001").unwrap_err();
    assert!(
        errors
            .get(Field::AmountSpent)
            .unwrap()
            .contains("can't exceed Budget")
    );
}

#[test]
fn test_unparsable_text_is_not_entered() {
    let errors = evaluate("ten thousand", "30", "", "5").unwrap_err();
    assert!(errors.contains(Field::TotalBudget));
    assert!(errors.contains(Field::DaysElapsed));
    assert!(!errors.contains(Field::TotalDays));
    assert!(!errors.contains(Field::AmountSpent));
}

#[test]
fn test_full_spend_is_one_hundred_percent() {
    let result = evaluate("4321.09", "10", "10", "4321.09").unwrap();
    assert_eq!(result.percent_of_budget_spent, dec!(100));
    assert_eq!(result.target_spend, dec!(4321.09));
    assert_eq!(result.recommended_daily, dec!(0));
}

#[test]
fn test_exact_five_percent_under_leaves_on_track_band() {
    let result = evaluate("3000", "3", "1", "950").unwrap();
    assert_eq!(result.target_spend, dec!(1000));
    assert_eq!(result.status, PacingStatus::UnderPaceOk);
    assert_eq!(result.direction(), PacingDirection::Underpacing);
}

#[test]
fn test_exact_twenty_percent_over_is_not_escalated() {
    let result = evaluate("3000", "3", "1", "1200").unwrap();
    assert_eq!(result.target_spend, dec!(1000));
    assert_eq!(result.variance_percent, dec!(20));
    assert_eq!(result.status, PacingStatus::OverPaceWarn);
}
