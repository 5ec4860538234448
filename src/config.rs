//! SDK configuration, loaded from the environment.

use crate::error::ConfigError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct SdkConfig {
    /// Base URL of the backend REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. The backend contract has none; this closes that gap.
    pub timeout_secs: u64,
}

impl SdkConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        SdkConfig {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `BACKOFFICE_API_BASE_URL` and optional `BACKOFFICE_API_TIMEOUT_SECS`.
    /// A `.env` file is honored when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("BACKOFFICE_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("BACKOFFICE_API_BASE_URL"))?;
        let timeout_secs = match std::env::var("BACKOFFICE_API_TIMEOUT_SECS") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidTimeout(s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let config = SdkConfig {
            base_url,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".into()));
        }
        Ok(())
    }
}
