//! Quote engine configuration.

use serde::{Deserialize, Serialize};

use perch_core::{DomainError, DomainResult, Money};

use crate::eligibility::EligibilityPolicy;
use crate::resolver::TierOverflow;

pub const DEFAULT_PLAN: &str = "Professional";

pub const ENV_ELIGIBLE_PLAN: &str = "PERCH_ELIGIBLE_PLAN";
pub const ENV_FINANCED_CEILING: &str = "PERCH_FINANCED_CEILING";
pub const ENV_TIER_OVERFLOW: &str = "PERCH_TIER_OVERFLOW";
pub const ENV_DEFAULT_PLAN: &str = "PERCH_DEFAULT_PLAN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub eligibility: EligibilityPolicy,
    #[serde(default)]
    pub overflow: TierOverflow,
    /// Plan preselected when a session starts.
    #[serde(default = "default_plan")]
    pub default_plan: String,
}

fn default_plan() -> String {
    DEFAULT_PLAN.to_string()
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            eligibility: EligibilityPolicy::default(),
            overflow: TierOverflow::default(),
            default_plan: default_plan(),
        }
    }
}

impl QuoteConfig {
    /// Read overrides from the process environment.
    ///
    /// Falls back to the defaults (with a warning) if any value is invalid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid quote configuration; using defaults");
            Self::default()
        })
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(plan) = non_empty(lookup(ENV_ELIGIBLE_PLAN)) {
            config.eligibility.eligible_plan = plan;
        }
        if let Some(raw) = non_empty(lookup(ENV_FINANCED_CEILING)) {
            config.eligibility.financed_ceiling = Money::parse_decimal(&raw).ok_or_else(|| {
                DomainError::config(format!("{ENV_FINANCED_CEILING}: not an amount: {raw}"))
            })?;
        }
        if let Some(raw) = non_empty(lookup(ENV_TIER_OVERFLOW)) {
            config.overflow = match raw.to_ascii_lowercase().as_str() {
                "zero" => TierOverflow::Zero,
                "largest_tier" | "largest-tier" => TierOverflow::LargestTier,
                _ => {
                    return Err(DomainError::config(format!(
                        "{ENV_TIER_OVERFLOW}: expected zero or largest_tier, got {raw}"
                    )));
                }
            };
        }
        if let Some(plan) = non_empty(lookup(ENV_DEFAULT_PLAN)) {
            config.default_plan = plan;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
