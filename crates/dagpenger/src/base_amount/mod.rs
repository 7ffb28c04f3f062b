//! The statutory base amount (G) and the thresholds derived from it.

mod provider;
mod rules;

pub use provider::{BaseAmountProvider, ConnectivityError, FixedBaseAmount, HttpBaseAmountProvider};
pub use rules::BaseAmountRules;

use chrono::NaiveDate;
use serde::Serialize;

/// One G, optionally stamped with the date it took effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseAmount {
    value: f64,
    effective_from: Option<NaiveDate>,
}

impl BaseAmount {
    /// Stand-in used when the lookup failed and the caller accepted a degraded result.
    pub const ZERO: BaseAmount = BaseAmount {
        value: 0.0,
        effective_from: None,
    };

    /// Returns `None` for negative or non-finite values.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self {
            value,
            effective_from: None,
        })
    }

    pub fn effective_from(mut self, date: NaiveDate) -> Self {
        self.effective_from = Some(date);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.effective_from
    }
}
