//! Route construction settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constructive::OriginExclusion;
use crate::distance::SearchStrategy;
use crate::error::ConfigError;

/// Settings for one route construction run.
///
/// Every field has a default, so a JSON file only needs the keys it
/// changes.
///
/// # Examples
///
/// ```
/// use u_autoroute::config::RouteConfig;
/// use u_autoroute::distance::SearchStrategy;
///
/// let config = RouteConfig::from_json_str(r#"{ "autonomy_max": 500, "strategy": "rtree" }"#).unwrap();
/// assert_eq!(config.autonomy_max, 500.0);
/// assert_eq!(config.strategy, SearchStrategy::RTree);
/// assert_eq!(config.threads, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    /// Maximum distance the vehicle may travel, return included.
    pub autonomy_max: f64,
    /// Nearest-point search strategy.
    pub strategy: SearchStrategy,
    /// Worker threads for [`SearchStrategy::Parallel`]; 0 runs on rayon's
    /// global pool.
    pub threads: usize,
    /// How the origin is excluded from the candidates.
    pub origin_exclusion: OriginExclusion,
}

impl RouteConfig {
    /// Default autonomy budget.
    pub const DEFAULT_AUTONOMY: f64 = 2000.0;

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects budgets that are NaN or infinite.
    ///
    /// Zero and negative budgets are accepted: they produce an origin-only
    /// route.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.autonomy_max.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "autonomy_max must be finite, got {}",
                self.autonomy_max
            )));
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            autonomy_max: Self::DEFAULT_AUTONOMY,
            strategy: SearchStrategy::Linear,
            threads: 0,
            origin_exclusion: OriginExclusion::ByIndex,
        }
    }
}
