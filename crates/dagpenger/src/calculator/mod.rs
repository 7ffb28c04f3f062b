//! Eligibility check, method selection and daily-rate calculation.
//!
//! A person qualifies when either of these holds:
//! - the three most recent annual incomes together reach 3 G, or
//! - the most recent annual income alone reaches 1.5 G.
//!
//! The annual basis is the three-year average, the latest income, or 6 G when
//! the latest income exceeds it. The basis is spread over 260 working days and
//! rounded up to whole kroner.

#[cfg(test)]
mod tests;

use crate::base_amount::BaseAmountRules;
use crate::decision::BenefitDecision;
use crate::income::{IncomeRecord, IncomeRegister, RegisterError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Working days in a year used to turn an annual basis into a daily rate.
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;
/// Number of recent years considered for eligibility and averaging.
pub const ASSESSMENT_WINDOW_YEARS: u32 = 3;

/// How the annual basis for the daily rate is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    LatestIncome,
    ThreeYearAverage,
    MaximumBasis,
}

impl CalculationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::LatestIncome => "latest_income",
            CalculationMethod::ThreeYearAverage => "three_year_average",
            CalculationMethod::MaximumBasis => "maximum_basis",
        }
    }
}

/// Full outcome of one calculation, keeping eligibility apart from the rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub eligible: bool,
    /// `None` when the person is not eligible.
    pub method: Option<CalculationMethod>,
    /// Annual amount the daily rate was derived from.
    pub basis: f64,
    pub daily_rate: f64,
}

/// Benefit calculation over one person's income history.
#[derive(Debug, Clone)]
pub struct BenefitCalculator {
    register: IncomeRegister,
    rules: BaseAmountRules,
}

impl BenefitCalculator {
    pub fn new(rules: BaseAmountRules) -> Self {
        Self::with_register(rules, IncomeRegister::new())
    }

    pub fn with_register(rules: BaseAmountRules, register: IncomeRegister) -> Self {
        Self { register, rules }
    }

    pub fn add_income(&mut self, record: IncomeRecord) -> Result<(), RegisterError> {
        self.register.add(record)
    }

    pub fn register(&self) -> &IncomeRegister {
        &self.register
    }

    pub fn rules(&self) -> &BaseAmountRules {
        &self.rules
    }

    pub fn is_eligible(&self) -> Result<bool, RegisterError> {
        let latest = self.register.latest()?.amount();
        let recent_total = self.recent_total()?;

        let over_window = recent_total >= self.rules.total_over_years(ASSESSMENT_WINDOW_YEARS);
        let latest_year = latest >= self.rules.minimum_annual_income_for_eligibility();

        info!(
            recent_total,
            latest,
            over_window,
            latest_year,
            degraded = self.rules.is_degraded(),
            "eligibility evaluated"
        );
        Ok(over_window || latest_year)
    }

    pub fn select_method(&self) -> Result<CalculationMethod, RegisterError> {
        let latest = self.register.latest()?.amount();
        let average = self.recent_average()?;

        let method = if latest <= average {
            CalculationMethod::ThreeYearAverage
        } else if latest > self.rules.maximum_annual_benefit_basis() {
            CalculationMethod::MaximumBasis
        } else {
            CalculationMethod::LatestIncome
        };

        info!(latest, average, method = method.label(), "calculation method selected");
        Ok(method)
    }

    /// Daily rate in whole kroner; 0 when the person is not eligible.
    pub fn calculate_daily_rate(&self) -> Result<f64, RegisterError> {
        Ok(self.assess()?.daily_rate)
    }

    pub fn assess(&self) -> Result<Assessment, RegisterError> {
        if !self.is_eligible()? {
            return Ok(Assessment {
                eligible: false,
                method: None,
                basis: 0.0,
                daily_rate: 0.0,
            });
        }

        let method = self.select_method()?;
        let basis = match method {
            CalculationMethod::LatestIncome => self.register.latest()?.amount(),
            CalculationMethod::ThreeYearAverage => self.recent_average()?,
            CalculationMethod::MaximumBasis => self.rules.maximum_annual_benefit_basis(),
        };

        Ok(Assessment {
            eligible: true,
            method: Some(method),
            basis,
            daily_rate: (basis / WORKING_DAYS_PER_YEAR).ceil(),
        })
    }

    pub fn decide(&self) -> Result<BenefitDecision, RegisterError> {
        self.assess().map(|assessment| BenefitDecision::from_assessment(&assessment))
    }

    fn recent_total(&self) -> Result<f64, RegisterError> {
        self.register.sum_recent(ASSESSMENT_WINDOW_YEARS as usize)
    }

    // Always divides by the full window, even when fewer years are on file.
    fn recent_average(&self) -> Result<f64, RegisterError> {
        Ok(self.recent_total()? / f64::from(ASSESSMENT_WINDOW_YEARS))
    }
}
