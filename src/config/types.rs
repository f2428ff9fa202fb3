//! Configuration type definitions.

use crate::constants::{DEFAULT_DOWN_SAMPLE_FACTOR, config_keys};
use serde::{Deserialize, Serialize};

/// Transform options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Normalization settings.
    pub normalize: NormalizeConfig,

    /// Down-sampling settings.
    pub down_sample: DownSampleConfig,
}

/// Normalization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// What to do when a signal or channel has zero peak amplitude.
    pub zero_peak: ZeroPeakPolicy,
}

/// Down-sampling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownSampleConfig {
    /// Decimation stride; must be at least 1.
    pub factor: usize,
}

impl Default for DownSampleConfig {
    fn default() -> Self {
        Self {
            factor: DEFAULT_DOWN_SAMPLE_FACTOR,
        }
    }
}

/// Handling of all-zero signals or channels during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroPeakPolicy {
    /// Fail with a division-by-zero error.
    #[default]
    Reject,
    /// Return the silent channel unchanged.
    Passthrough,
}

impl std::fmt::Display for ZeroPeakPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "{}", config_keys::ZERO_PEAK_REJECT),
            Self::Passthrough => write!(f, "{}", config_keys::ZERO_PEAK_PASSTHROUGH),
        }
    }
}

impl std::str::FromStr for ZeroPeakPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            config_keys::ZERO_PEAK_REJECT => Ok(Self::Reject),
            config_keys::ZERO_PEAK_PASSTHROUGH => Ok(Self::Passthrough),
            other => Err(format!("unknown zero-peak policy: {other}")),
        }
    }
}
