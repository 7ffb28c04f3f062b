use super::common::*;
use crate::base_amount::{BaseAmount, BaseAmountRules};
use crate::calculator::BenefitCalculator;
use crate::income::{IncomeRecord, RegisterError};

#[test]
fn eligible_from_three_year_total() {
    let calculator = calculator(
        G_ROUND,
        &[(2022, 445000.0), (2024, 465000.0), (2023, 300000.0)],
    );

    assert_eq!(calculator.is_eligible(), Ok(true));
}

#[test]
fn eligible_from_latest_year_alone() {
    let calculator = calculator(G_ROUND, &[(2022, 0.0), (2023, 0.0), (2024, 467000.0)]);

    assert_eq!(calculator.register().sum_recent(3), Ok(467000.0));
    assert_eq!(calculator.is_eligible(), Ok(true));
}

#[test]
fn not_eligible_when_both_thresholds_missed() {
    let calculator = calculator(
        G_ROUND,
        &[(2022, 44000.0), (2024, 52000.0), (2023, 100000.0)],
    );

    assert_eq!(calculator.is_eligible(), Ok(false));
    assert_eq!(calculator.calculate_daily_rate(), Ok(0.0));
}

#[test]
fn not_eligible_with_single_modest_year_at_2024_g() {
    let calculator = calculator(G_2024, &[(2022, 0.0), (2024, 130000.0), (2023, 0.0)]);

    assert_eq!(calculator.is_eligible(), Ok(false));
}

#[test]
fn thresholds_are_inclusive() {
    let on_latest = calculator(G_ROUND, &[(2024, 450000.0)]);
    assert_eq!(on_latest.is_eligible(), Ok(true));

    let on_total = calculator(
        G_ROUND,
        &[(2022, 400000.0), (2023, 400000.0), (2024, 100000.0)],
    );
    assert_eq!(on_total.is_eligible(), Ok(true));
}

#[test]
fn only_three_most_recent_years_count() {
    let calculator = calculator(
        G_ROUND,
        &[
            (2019, 5_000_000.0),
            (2022, 100000.0),
            (2023, 100000.0),
            (2024, 100000.0),
        ],
    );

    assert_eq!(calculator.is_eligible(), Ok(false));
}

#[test]
fn empty_register_fails_loudly() {
    let calculator = BenefitCalculator::new(rules(G_ROUND));
    let out_of_range = RegisterError::OutOfRange { index: 0, len: 0 };

    assert_eq!(calculator.is_eligible(), Err(out_of_range.clone()));
    assert_eq!(calculator.select_method(), Err(out_of_range.clone()));
    assert_eq!(calculator.calculate_daily_rate(), Err(out_of_range.clone()));
    assert_eq!(calculator.assess(), Err(out_of_range.clone()));
    assert!(matches!(
        calculator.decide(),
        Err(RegisterError::OutOfRange { .. })
    ));
}

#[test]
fn empty_register_fails_even_with_zero_g() {
    let calculator = BenefitCalculator::new(BaseAmountRules::new(BaseAmount::ZERO));

    assert_eq!(
        calculator.is_eligible(),
        Err(RegisterError::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn zero_g_makes_everyone_eligible() {
    let mut calculator = BenefitCalculator::new(BaseAmountRules::new(BaseAmount::ZERO));
    calculator
        .add_income(IncomeRecord::new(2024, 0.0))
        .expect("valid income");

    assert_eq!(calculator.is_eligible(), Ok(true));
}
