//! Runtime configuration for routing.
//!
//! Values are read from the environment (optionally seeded from a
//! `.env` file) and may be overridden programmatically:
//! ```bash
//! ROUTERS_CAMPUS_NEIGHBORS=3
//! ROUTERS_CAMPUS_STRATEGY=indexed
//! ROUTERS_CAMPUS_CACHE=true
//! ```

use crate::error::ConfigError;

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

pub const DEFAULT_NEIGHBORS: usize = 3;

pub const ENV_NEIGHBORS: &str = "ROUTERS_CAMPUS_NEIGHBORS";
pub const ENV_STRATEGY: &str = "ROUTERS_CAMPUS_STRATEGY";
pub const ENV_CACHE: &str = "ROUTERS_CAMPUS_CACHE";

/// How the graph builder selects the K nearest neighbours of a location.
///
/// Both strategies produce the same graph; they differ only in cost.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum NeighborStrategy {
    /// Measure every pair, `O(N²)`.
    #[default]
    Exhaustive,
    /// Walk an R-tree of the catalog in distance order.
    Indexed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// The number of outgoing edges each location receives (K).
    pub neighbors: usize,
    pub strategy: NeighborStrategy,
    /// Re-use built graphs between requests.
    pub cache: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            strategy: NeighborStrategy::default(),
            cache: false,
        }
    }
}

impl RouteConfig {
    pub fn with_neighbors(self, neighbors: usize) -> Self {
        Self { neighbors, ..self }
    }

    pub fn with_strategy(self, strategy: NeighborStrategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn with_cache(self, cache: bool) -> Self {
        Self { cache, ..self }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.neighbors == 0 {
            return Err(ConfigError::ZeroNeighbors);
        }

        Ok(self)
    }

    /// Loads and validates the configuration from the process environment,
    /// reading a `.env` file first if one exists. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::read_env()?.validate()
    }

    /// Builds and validates a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::read_lookup(lookup)?.validate()
    }

    /// Parses the environment without validating it, so callers can apply
    /// overrides before calling [RouteConfig::validate].
    pub fn read_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        Self::read_lookup(|key| std::env::var(key).ok())
    }

    /// Parses every known key from `lookup`. Malformed values are rejected,
    /// but the result is not validated.
    pub fn read_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RouteConfig::default();

        if let Some(value) = lookup(ENV_NEIGHBORS) {
            config.neighbors =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: ENV_NEIGHBORS,
                        value: value.clone(),
                    })?;
        }

        if let Some(value) = lookup(ENV_STRATEGY) {
            config.strategy = NeighborStrategy::from_str(value.trim())
                .map_err(|_| ConfigError::InvalidStrategy { value })?;
        }

        if let Some(value) = lookup(ENV_CACHE) {
            config.cache = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        key: ENV_CACHE,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
