use crate::base_amount::{BaseAmount, BaseAmountRules};
use crate::calculator::BenefitCalculator;
use crate::income::IncomeRecord;

/// G from 1 May 2024: 3 G = 372 084, 1.5 G = 186 042, 6 G = 744 168.
pub(super) const G_2024: f64 = 124028.0;
/// Round G where 1.5 G = 450 000, 3 G = 900 000 and 6 G = 2 700 000.
pub(super) const G_ROUND: f64 = 300000.0;

pub(super) fn rules(g: f64) -> BaseAmountRules {
    BaseAmountRules::new(BaseAmount::new(g).expect("valid G"))
}

pub(super) fn calculator(g: f64, incomes: &[(i32, f64)]) -> BenefitCalculator {
    let mut calculator = BenefitCalculator::new(rules(g));
    for (year, amount) in incomes {
        calculator
            .add_income(IncomeRecord::new(*year, *amount))
            .expect("valid income");
    }
    calculator
}
