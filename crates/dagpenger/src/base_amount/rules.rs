use super::provider::{BaseAmountProvider, ConnectivityError};
use super::BaseAmount;
use tracing::{info, warn};

const MINIMUM_INCOME_MULTIPLIER: f64 = 1.5;
const MAXIMUM_BASIS_MULTIPLIER: f64 = 6.0;

/// Pure threshold derivations from a single base amount.
///
/// Nothing is cached; every threshold is recomputed from the held G, so a zero G
/// from a degraded lookup flows straight into every comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseAmountRules {
    base: BaseAmount,
    degraded: bool,
}

impl BaseAmountRules {
    pub fn new(base: BaseAmount) -> Self {
        Self {
            base,
            degraded: false,
        }
    }

    /// Fetches G once and fails if the provider cannot deliver it.
    pub async fn from_provider<P>(provider: &P) -> Result<Self, ConnectivityError>
    where
        P: BaseAmountProvider + ?Sized,
    {
        let base = provider.fetch_base_amount().await?;
        info!(
            base_amount = base.value(),
            effective_from = ?base.effective_date(),
            "base amount resolved"
        );
        Ok(Self::new(base))
    }

    /// Fetches G once, falling back to [`BaseAmount::ZERO`] when the lookup fails.
    pub async fn from_provider_or_degraded<P>(provider: &P) -> Self
    where
        P: BaseAmountProvider + ?Sized,
    {
        match Self::from_provider(provider).await {
            Ok(rules) => rules,
            Err(err) => {
                warn!(error = %err, "base amount lookup failed, continuing with G = 0");
                Self {
                    base: BaseAmount::ZERO,
                    degraded: true,
                }
            }
        }
    }

    pub fn base_amount(&self) -> BaseAmount {
        self.base
    }

    /// True only when a failed lookup was replaced by [`BaseAmount::ZERO`].
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn total_over_years(&self, years: u32) -> f64 {
        self.base.value() * f64::from(years)
    }

    /// 1.5 G: the single most recent year that alone grants eligibility.
    pub fn minimum_annual_income_for_eligibility(&self) -> f64 {
        self.base.value() * MINIMUM_INCOME_MULTIPLIER
    }

    /// 6 G: the cap on the annual income a daily rate can be based on.
    pub fn maximum_annual_benefit_basis(&self) -> f64 {
        self.base.value() * MAXIMUM_BASIS_MULTIPLIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_amount::FixedBaseAmount;

    fn rules(g: f64) -> BaseAmountRules {
        BaseAmountRules::new(BaseAmount::new(g).expect("valid G"))
    }

    #[test]
    fn derives_thresholds_from_g() {
        let rules = rules(124028.0);

        assert_eq!(rules.total_over_years(3), 372084.0);
        assert_eq!(rules.minimum_annual_income_for_eligibility(), 186042.0);
        assert_eq!(rules.maximum_annual_benefit_basis(), 744168.0);
        assert!(!rules.is_degraded());
    }

    #[test]
    fn zero_g_collapses_every_threshold() {
        let rules = BaseAmountRules::new(BaseAmount::ZERO);

        assert_eq!(rules.total_over_years(3), 0.0);
        assert_eq!(rules.minimum_annual_income_for_eligibility(), 0.0);
        assert_eq!(rules.maximum_annual_benefit_basis(), 0.0);
    }

    #[test]
    fn base_amount_rejects_negative_and_non_finite() {
        assert!(BaseAmount::new(-0.5).is_none());
        assert!(BaseAmount::new(f64::NAN).is_none());
        assert!(BaseAmount::new(0.0).is_some());
    }

    struct Unreachable;

    #[async_trait::async_trait]
    impl BaseAmountProvider for Unreachable {
        async fn fetch_base_amount(&self) -> Result<BaseAmount, ConnectivityError> {
            Err(ConnectivityError::Status(503))
        }
    }

    #[tokio::test]
    async fn strict_construction_surfaces_lookup_failure() {
        let err = BaseAmountRules::from_provider(&Unreachable)
            .await
            .expect_err("lookup failure surfaces");

        assert!(matches!(err, ConnectivityError::Status(503)));
    }

    #[tokio::test]
    async fn degraded_construction_falls_back_to_zero() {
        let rules = BaseAmountRules::from_provider_or_degraded(&Unreachable).await;

        assert!(rules.is_degraded());
        assert_eq!(rules.base_amount(), BaseAmount::ZERO);
    }

    #[tokio::test]
    async fn deliberate_zero_g_is_not_degraded() {
        let provider = FixedBaseAmount::new(BaseAmount::ZERO);

        let strict = BaseAmountRules::from_provider(&provider)
            .await
            .expect("fixed provider never fails");
        let lenient = BaseAmountRules::from_provider_or_degraded(&provider).await;

        assert!(!strict.is_degraded());
        assert!(!lenient.is_degraded());
        assert_eq!(lenient.maximum_annual_benefit_basis(), 0.0);
    }

    #[tokio::test]
    async fn fixed_provider_feeds_rules() {
        let provider = FixedBaseAmount::new(BaseAmount::new(300000.0).expect("valid G"));

        let rules = BaseAmountRules::from_provider(&provider)
            .await
            .expect("fixed provider never fails");

        assert_eq!(rules.minimum_annual_income_for_eligibility(), 450000.0);
        assert_eq!(rules.total_over_years(3), 900000.0);
        assert_eq!(rules.maximum_annual_benefit_basis(), 2700000.0);
    }
}
