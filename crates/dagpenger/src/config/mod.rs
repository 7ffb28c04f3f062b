use crate::base_amount::BaseAmount;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_G_API_URL: &str = "https://g.nav.no/api/v1/grunnbeløp";
const DEFAULT_G_API_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_amount: BaseAmountConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("G_API_URL").unwrap_or_else(|_| DEFAULT_G_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let timeout_secs = match env::var("G_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_G_API_TIMEOUT_SECS,
        };

        let override_amount = match env::var("G_OVERRIDE") {
            Ok(raw) => Some(parse_base_amount(&raw)?),
            Err(_) => None,
        };

        let allow_degraded = env::var("G_ALLOW_DEGRADED")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            base_amount: BaseAmountConfig {
                api_url,
                timeout: Duration::from_secs(timeout_secs),
                override_amount,
                allow_degraded,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the base amount (G) comes from and how a failed lookup is treated.
#[derive(Debug, Clone)]
pub struct BaseAmountConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// Fixed G that bypasses the remote lookup entirely.
    pub override_amount: Option<BaseAmount>,
    pub allow_degraded: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_base_amount(raw: &str) -> Result<BaseAmount, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(BaseAmount::new)
        .ok_or_else(|| ConfigError::InvalidBaseAmount(raw.to_string()))
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidApiUrl(String),
    InvalidTimeout,
    InvalidBaseAmount(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidApiUrl(url) => {
                write!(f, "G_API_URL must be an http(s) URL, got '{url}'")
            }
            ConfigError::InvalidTimeout => write!(f, "G_API_TIMEOUT_SECS must be a valid u64"),
            ConfigError::InvalidBaseAmount(raw) => {
                write!(f, "G_OVERRIDE must be a non-negative number, got '{raw}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
