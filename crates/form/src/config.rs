//! Form configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use perch_core::{DomainError, DomainResult};

pub const DEFAULT_COUNTRY: &str = "United States";
pub const DEFAULT_REGION: &str = "Alabama";
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2_500;

pub const ENV_DEFAULT_COUNTRY: &str = "PERCH_DEFAULT_COUNTRY";
pub const ENV_DEFAULT_REGION: &str = "PERCH_DEFAULT_REGION";
pub const ENV_PROCESSING_DELAY_MS: &str = "PERCH_PROCESSING_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Country whose selection also requires a region.
    pub default_country: String,
    /// Region preselected when the form loads.
    pub default_region: Option<String>,
    /// Length of the "processing" pause between step 1 and step 2.
    pub processing_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.to_string(),
            default_region: Some(DEFAULT_REGION.to_string()),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
        }
    }
}

impl FormConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Read overrides from the process environment, falling back to defaults
    /// (with a warning) on invalid values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid form configuration; using defaults");
            Self::default()
        })
    }

    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(country) = lookup(ENV_DEFAULT_COUNTRY).filter(|v| !v.trim().is_empty()) {
            config.default_country = country.trim().to_string();
        }
        // An empty value clears the preselected region.
        if let Some(region) = lookup(ENV_DEFAULT_REGION) {
            let region = region.trim();
            config.default_region = (!region.is_empty()).then(|| region.to_string());
        }
        if let Some(raw) = lookup(ENV_PROCESSING_DELAY_MS) {
            config.processing_delay_ms = raw.trim().parse().map_err(|_| {
                DomainError::config(format!("{ENV_PROCESSING_DELAY_MS}: not a number of milliseconds: {raw}"))
            })?;
        }

        Ok(config)
    }
}
