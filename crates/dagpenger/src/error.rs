use crate::base_amount::ConnectivityError;
use crate::config::ConfigError;
use crate::decision::ReviewError;
use crate::income::{IncomeImportError, RegisterError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(IncomeImportError),
    Register(RegisterError),
    Connectivity(ConnectivityError),
    Review(ReviewError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Register(err) => write!(f, "income register error: {}", err),
            AppError::Connectivity(err) => write!(f, "base amount unavailable: {}", err),
            AppError::Review(err) => write!(f, "review error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Register(err) => Some(err),
            AppError::Connectivity(err) => Some(err),
            AppError::Review(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IncomeImportError> for AppError {
    fn from(value: IncomeImportError) -> Self {
        Self::Import(value)
    }
}

impl From<RegisterError> for AppError {
    fn from(value: RegisterError) -> Self {
        Self::Register(value)
    }
}

impl From<ConnectivityError> for AppError {
    fn from(value: ConnectivityError) -> Self {
        Self::Connectivity(value)
    }
}

impl From<ReviewError> for AppError {
    fn from(value: ReviewError) -> Self {
        Self::Review(value)
    }
}
