use super::{BenefitDecision, Specialization};
use tracing::{info, warn};

/// Why a caseworker could not confirm a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("caseworker specialised in {handler} cannot review a {decision} decision")]
    SpecializationMismatch {
        handler: Specialization,
        decision: Specialization,
    },
    #[error("decision was already reviewed by a {0} caseworker")]
    AlreadyReviewed(Specialization),
}

/// Caseworker who confirms decisions within a single specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseHandler {
    specialization: Specialization,
}

impl CaseHandler {
    pub fn new(specialization: Specialization) -> Self {
        Self { specialization }
    }

    pub fn specialization(&self) -> Specialization {
        self.specialization
    }

    /// Returns a reviewed copy of `decision`; the input is never modified.
    pub fn review(&self, decision: &BenefitDecision) -> Result<BenefitDecision, ReviewError> {
        if let Some(reviewer) = decision.reviewed_by() {
            warn!(reviewer = %reviewer, "decision already reviewed");
            return Err(ReviewError::AlreadyReviewed(reviewer));
        }

        if decision.category() != self.specialization {
            warn!(
                handler = %self.specialization,
                decision = %decision.category(),
                "review refused outside specialization"
            );
            return Err(ReviewError::SpecializationMismatch {
                handler: self.specialization,
                decision: decision.category(),
            });
        }

        let reviewed = decision.confirmed_by(self.specialization);
        info!(
            specialization = %self.specialization,
            approved = reviewed.approved(),
            rate = reviewed.rate(),
            "decision reviewed"
        );
        Ok(reviewed)
    }

    /// The approval a review would produce, or false when the review is refused.
    pub fn approves(&self, decision: &BenefitDecision) -> bool {
        self.review(decision)
            .map(|reviewed| reviewed.approved())
            .unwrap_or(false)
    }
}
