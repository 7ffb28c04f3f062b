use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome category a decision falls into and a caseworker is authorised to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    DeniedLowIncome,
    Approved,
    ApprovedAtMaximum,
}

impl Specialization {
    pub const ALL: [Specialization; 3] = [
        Specialization::DeniedLowIncome,
        Specialization::Approved,
        Specialization::ApprovedAtMaximum,
    ];

    pub const fn default_approved(self) -> bool {
        match self {
            Specialization::DeniedLowIncome => false,
            Specialization::Approved => true,
            Specialization::ApprovedAtMaximum => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Specialization::DeniedLowIncome => "denied_low_income",
            Specialization::Approved => "approved",
            Specialization::ApprovedAtMaximum => "approved_at_maximum",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown specialization '{0}' (expected one of denied_low_income, approved, approved_at_maximum)")]
pub struct UnknownSpecialization(pub String);

impl FromStr for Specialization {
    type Err = UnknownSpecialization;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Specialization::ALL
            .into_iter()
            .find(|candidate| candidate.label() == normalized)
            .ok_or_else(|| UnknownSpecialization(value.to_string()))
    }
}
