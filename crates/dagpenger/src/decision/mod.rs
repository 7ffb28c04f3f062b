//! Case decisions built from an assessment and the caseworkers who confirm them.

mod handler;
mod specialization;

pub use handler::{CaseHandler, ReviewError};
pub use specialization::{Specialization, UnknownSpecialization};

use crate::calculator::{Assessment, CalculationMethod};
use serde::Serialize;

/// Immutable outcome of one calculation, ready for caseworker review.
///
/// Built only from an [`Assessment`] or by a [`CaseHandler`] review; it serializes
/// for presentation but cannot be deserialized into an inconsistent state:
///
/// ```compile_fail
/// let decision: dagpenger::BenefitDecision = serde_json::from_str(
///     r#"{"rate":0.0,"category":"denied_low_income","approved":true,"reviewed_by":null}"#,
/// )
/// .unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenefitDecision {
    rate: f64,
    category: Specialization,
    approved: bool,
    reviewed_by: Option<Specialization>,
}

impl BenefitDecision {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let category = if !assessment.eligible {
            Specialization::DeniedLowIncome
        } else if assessment.method == Some(CalculationMethod::MaximumBasis) {
            Specialization::ApprovedAtMaximum
        } else {
            Specialization::Approved
        };

        Self::new(assessment.daily_rate, category)
    }

    pub fn new(rate: f64, category: Specialization) -> Self {
        Self {
            rate,
            category,
            approved: category.default_approved(),
            reviewed_by: None,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn category(&self) -> Specialization {
        self.category
    }

    pub fn approved(&self) -> bool {
        self.approved
    }

    pub fn reviewed_by(&self) -> Option<Specialization> {
        self.reviewed_by
    }

    pub fn is_reviewed(&self) -> bool {
        self.reviewed_by.is_some()
    }

    pub fn summary(&self) -> String {
        let verdict = if self.approved { "approved" } else { "denied" };
        let review = if self.is_reviewed() {
            "confirmed by caseworker"
        } else {
            "pending review"
        };
        format!(
            "{} ({}): daily rate {:.0} NOK, {}",
            verdict,
            self.category.label(),
            self.rate,
            review
        )
    }

    pub(crate) fn confirmed_by(self, specialization: Specialization) -> Self {
        Self {
            approved: specialization.default_approved(),
            reviewed_by: Some(specialization),
            ..self
        }
    }
}
