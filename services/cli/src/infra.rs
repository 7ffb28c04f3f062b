use dagpenger::config::BaseAmountConfig;
use dagpenger::{
    BaseAmount, BaseAmountRules, ConnectivityError, FixedBaseAmount, HttpBaseAmountProvider,
    IncomeRecord,
};
use tracing::info;

/// Resolves G once: a fixed override skips the network, otherwise the HTTP lookup runs
/// strictly unless degraded operation was allowed.
pub(crate) async fn resolve_rules(
    config: &BaseAmountConfig,
    override_amount: Option<BaseAmount>,
    allow_degraded: bool,
) -> Result<BaseAmountRules, ConnectivityError> {
    if let Some(base) = override_amount.or(config.override_amount) {
        info!(base_amount = base.value(), "using fixed base amount");
        return BaseAmountRules::from_provider(&FixedBaseAmount::new(base)).await;
    }

    let provider = HttpBaseAmountProvider::from_config(config)?;
    if allow_degraded || config.allow_degraded {
        Ok(BaseAmountRules::from_provider_or_degraded(&provider).await)
    } else {
        BaseAmountRules::from_provider(&provider).await
    }
}

/// Parses a fixed G given on the command line, e.g. `124028`.
pub(crate) fn parse_base_amount(raw: &str) -> Result<BaseAmount, String> {
    let value = raw
        .trim()
        .replace(['_', ' '], "")
        .parse::<f64>()
        .map_err(|err| format!("invalid base amount '{raw}' ({err})"))?;

    BaseAmount::new(value).ok_or_else(|| format!("base amount must be non-negative, got '{raw}'"))
}

/// Parses `YEAR=AMOUNT`, e.g. `2024=550000`.
pub(crate) fn parse_income(raw: &str) -> Result<IncomeRecord, String> {
    let (year, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected YEAR=AMOUNT, got '{raw}'"))?;

    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid year in '{raw}' ({err})"))?;
    let amount = amount
        .trim()
        .replace(['_', ' '], "")
        .parse::<f64>()
        .map_err(|err| format!("invalid amount in '{raw}' ({err})"))?;

    Ok(IncomeRecord::new(year, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_config() -> BaseAmountConfig {
        BaseAmountConfig {
            api_url: "http://127.0.0.1:9/unused".to_string(),
            timeout: Duration::from_secs(1),
            override_amount: None,
            allow_degraded: false,
        }
    }

    #[test]
    fn parses_year_and_amount() {
        let record = parse_income("2024=550_000").expect("valid income");
        assert_eq!(record.year(), 2024);
        assert_eq!(record.amount(), 550000.0);
    }

    #[test]
    fn rejects_missing_separator_and_bad_numbers() {
        assert!(parse_income("2024:550000").is_err());
        assert!(parse_income("twenty=1").is_err());
        assert!(parse_income("2024=lots").is_err());
    }

    #[test]
    fn parses_base_amount() {
        let base = parse_base_amount("124_028").expect("valid G");
        assert_eq!(base.value(), 124028.0);
    }

    #[test]
    fn rejects_negative_and_malformed_base_amount() {
        assert!(parse_base_amount("-1").is_err());
        assert!(parse_base_amount("NaN").is_err());
        assert!(parse_base_amount("plenty").is_err());
    }

    #[tokio::test]
    async fn cli_override_wins_over_config() {
        let mut config = offline_config();
        config.override_amount = BaseAmount::new(100000.0);

        let rules = resolve_rules(&config, BaseAmount::new(124028.0), false)
            .await
            .expect("fixed amount resolves");

        assert_eq!(rules.base_amount().value(), 124028.0);
        assert!(!rules.is_degraded());
    }

    #[tokio::test]
    async fn deliberate_zero_override_is_not_reported_as_degraded() {
        let rules = resolve_rules(&offline_config(), Some(BaseAmount::ZERO), true)
            .await
            .expect("fixed amount resolves");

        assert_eq!(rules.base_amount().value(), 0.0);
        assert!(!rules.is_degraded());
    }
}
