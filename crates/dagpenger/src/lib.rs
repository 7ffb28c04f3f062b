//! Dagpenger eligibility and daily-rate ("dagsats") calculation.
//!
//! Income records flow one way: [`income::IncomeRegister`] feeds the
//! [`calculator::BenefitCalculator`], which produces a
//! [`decision::BenefitDecision`] that a [`decision::CaseHandler`] may review.

pub mod base_amount;
pub mod calculator;
pub mod config;
pub mod decision;
pub mod error;
pub mod income;
pub mod telemetry;

pub use base_amount::{
    BaseAmount, BaseAmountProvider, BaseAmountRules, ConnectivityError, FixedBaseAmount,
    HttpBaseAmountProvider,
};
pub use calculator::{Assessment, BenefitCalculator, CalculationMethod};
pub use decision::{BenefitDecision, CaseHandler, ReviewError, Specialization, UnknownSpecialization};
pub use income::{IncomeImportError, IncomeImporter, IncomeRecord, IncomeRegister, RegisterError};
