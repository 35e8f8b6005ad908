//! Classifier configuration.

use crate::context::ContextFeature;
use crate::error::{ConfigResult, ConfigurationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Tunables for the context score. Every field has a default, so an empty
/// TOML document is a valid configuration.
///
/// ```toml
/// threshold = 2
///
/// [windows]
/// problem_emotion = 10
///
/// [weights]
/// CONSEQUENCE = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Context score at or above which a message is negative.
    pub threshold: u32,
    pub windows: ProximityWindows,
    /// Per-feature weight overrides.
    pub weights: BTreeMap<ContextFeature, u32>,
}

/// Token distances for the proximity features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProximityWindows {
    /// Max distance between a problem and an emotion word, either order.
    pub problem_emotion: usize,
    /// Max distance from an intensifier forward to a problem or emotion word.
    pub intensifier: usize,
    /// Max distance from a negation forward to a positive word.
    pub negation: usize,
}

impl Default for ProximityWindows {
    fn default() -> Self {
        Self {
            problem_emotion: 10,
            intensifier: 2,
            negation: 3,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            windows: ProximityWindows::default(),
            weights: BTreeMap::new(),
        }
    }
}

impl ClassifierConfig {
    pub const DEFAULT_THRESHOLD: u32 = 2;

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(origin: &str, content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigurationError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.threshold == 0 {
            return Err(ConfigurationError::InvalidValue {
                message: "threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Effective weight of `feature`.
    pub fn weight_of(&self, feature: ContextFeature) -> u32 {
        self.weights
            .get(&feature)
            .copied()
            .unwrap_or_else(|| feature.default_weight())
    }
}
