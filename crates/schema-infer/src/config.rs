//! Sampling policy and inference configuration.
//!
//! ## YAML Format
//!
//! ```yaml
//! sampling:
//!   fraction: 0.1
//!   min: 5
//!   max: 50
//! currency: USD
//! ```
//!
//! Every key is optional; each missing key falls back to its value in the
//! standard policy (so an omitted `max` is 50) or to USD. Write `max: ~` for
//! an unbounded window.

use crate::InferenceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How many leading records the inferencer inspects.
///
/// The window is always the first `clamp(ceil(len × fraction), min, max)`
/// records, capped at the number of records available. It is deterministic
/// and order-preserving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingPolicy {
    /// Fraction of the input to sample, in (0, 1]
    pub fraction: f64,
    /// Lower bound on the window size
    pub min: usize,
    /// Upper bound on the window size (`None` = unbounded)
    pub max: Option<usize>,
}

impl SamplingPolicy {
    /// 10 % of the input, at least 5 and at most 50 records.
    pub const fn standard() -> Self {
        Self {
            fraction: 0.10,
            min: 5,
            max: Some(50),
        }
    }

    /// 5 % of the input, at least 1 record, no upper bound.
    ///
    /// Key discovery and value lookup scan each sampled row linearly, so on
    /// very large inputs the unbounded window costs roughly
    /// keys² × sampled rows.
    pub const fn compact() -> Self {
        Self {
            fraction: 0.05,
            min: 1,
            max: None,
        }
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), InferenceError> {
        if !(self.fraction > 0.0 && self.fraction <= 1.0) {
            return Err(InferenceError::InvalidPolicy(format!(
                "fraction must be in (0, 1], got {}",
                self.fraction
            )));
        }
        if let Some(max) = self.max {
            if self.min > max {
                return Err(InferenceError::InvalidPolicy(format!(
                    "min ({}) exceeds max ({max})",
                    self.min
                )));
            }
        }
        Ok(())
    }

    /// Number of leading records to sample out of `len`.
    pub fn window(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (len as f64 * self.fraction).ceil() as usize;
        let upper = self.max.unwrap_or(usize::MAX);
        scaled.max(self.min).min(upper).min(len)
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Inference configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Sampling window policy
    #[serde(default)]
    pub sampling: SamplingPolicy,

    /// ISO 4217 code used for currency-formatted columns
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingPolicy::default(),
            currency: default_currency(),
        }
    }
}

impl InferenceConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InferenceError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, InferenceError> {
        let config: InferenceConfig = serde_yaml::from_str(yaml)?;
        config.sampling.validate()?;
        Ok(config)
    }

    /// Replace the sampling policy.
    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }
}
