use super::BaseAmount;
use crate::config::BaseAmountConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Source of the current base amount.
#[async_trait]
pub trait BaseAmountProvider: Send + Sync {
    async fn fetch_base_amount(&self) -> Result<BaseAmount, ConnectivityError>;
}

/// Failure to obtain a usable base amount from the remote lookup.
#[derive(Debug, thiserror::Error)]
pub enum ConnectivityError {
    #[error("base amount request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("base amount service answered with HTTP {0}")]
    Status(u16),
    #[error("base amount payload rejected: {0}")]
    InvalidPayload(String),
}

/// Provider that always answers with the same amount.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseAmount {
    base: BaseAmount,
}

impl FixedBaseAmount {
    pub fn new(base: BaseAmount) -> Self {
        Self { base }
    }
}

#[async_trait]
impl BaseAmountProvider for FixedBaseAmount {
    async fn fetch_base_amount(&self) -> Result<BaseAmount, ConnectivityError> {
        Ok(self.base)
    }
}

/// Looks up G from NAV's grunnbeløp API (or anything serving the same JSON shape).
pub struct HttpBaseAmountProvider {
    url: String,
    client: reqwest::Client,
}

impl HttpBaseAmountProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ConnectivityError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn from_config(config: &BaseAmountConfig) -> Result<Self, ConnectivityError> {
        Self::new(config.api_url.clone(), config.timeout)
    }
}

#[async_trait]
impl BaseAmountProvider for HttpBaseAmountProvider {
    async fn fetch_base_amount(&self) -> Result<BaseAmount, ConnectivityError> {
        debug!(url = %self.url, "requesting base amount");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConnectivityError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_payload(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GrunnbelopPayload {
    #[serde(rename = "grunnbeløp")]
    grunnbelop: Option<f64>,
    #[serde(default)]
    dato: Option<String>,
}

pub(crate) fn parse_payload(body: &str) -> Result<BaseAmount, ConnectivityError> {
    let payload: GrunnbelopPayload = serde_json::from_str(body)
        .map_err(|err| ConnectivityError::InvalidPayload(err.to_string()))?;

    let value = payload.grunnbelop.ok_or_else(|| {
        ConnectivityError::InvalidPayload("missing field 'grunnbeløp'".to_string())
    })?;
    let base = BaseAmount::new(value).ok_or_else(|| {
        ConnectivityError::InvalidPayload(format!("grunnbeløp must be non-negative, got {value}"))
    })?;

    let effective = payload
        .dato
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok());

    Ok(match effective {
        Some(date) => base.effective_from(date),
        None => base,
    })
}
