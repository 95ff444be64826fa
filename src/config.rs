//! Configuration management for `TripSmith`
//!
//! Settings are read from `TRIPSMITH_*` environment variables with sensible
//! defaults, and validated before use. The provider API key is only required
//! once a real provider client is constructed.

use std::env;

use serde::{Deserialize, Serialize};

use crate::{Result, TripSmithError};

/// Root configuration structure for the `TripSmith` library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSmithConfig {
    /// Places provider configuration
    pub provider: ProviderConfig,
    /// Cache configuration
    pub cache: CacheConfig,
    /// Default planning settings
    pub defaults: DefaultsConfig,
}

/// Places provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key (required when the Google client is constructed)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache entry TTL in seconds
    #[serde(default = "default_cache_ttl_seconds")]
    pub ttl_seconds: u64,
}

/// Default planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Candidate search radius in meters
    #[serde(default = "default_search_radius_m")]
    pub search_radius_m: u32,
    /// Maximum number of accommodation options to return
    #[serde(default = "default_max_stay_options")]
    pub max_stay_options: usize,
}

// Default value functions
fn default_timeout_seconds() -> u64 {
    10
}

fn default_cache_ttl_seconds() -> u64 {
    900
}

fn default_search_radius_m() -> u32 {
    15_000
}

fn default_max_stay_options() -> usize {
    8
}

impl Default for TripSmithConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                api_key: None,
                timeout_seconds: default_timeout_seconds(),
            },
            cache: CacheConfig {
                ttl_seconds: default_cache_ttl_seconds(),
            },
            defaults: DefaultsConfig {
                search_radius_m: default_search_radius_m(),
                max_stay_options: default_max_stay_options(),
            },
        }
    }
}

impl TripSmithConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.provider.api_key = env::var("TRIPSMITH_API_KEY")
            .or_else(|_| env::var("GOOGLE_PLACES_API_KEY"))
            .or_else(|_| env::var("GOOGLE_MAPS_API_KEY"))
            .ok();

        if let Some(value) = read_env_u64("TRIPSMITH_TIMEOUT_SECONDS")? {
            config.provider.timeout_seconds = value;
        }
        if let Some(value) = read_env_u64("TRIPSMITH_CACHE_TTL_SECONDS")? {
            config.cache.ttl_seconds = value;
        }
        if let Some(value) = read_env_u64("TRIPSMITH_SEARCH_RADIUS_M")? {
            config.defaults.search_radius_m = u32::try_from(value)
                .map_err(|_| TripSmithError::config("Search radius out of range"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.provider.api_key {
            if api_key.is_empty() {
                return Err(TripSmithError::config(
                    "Provider API key cannot be empty if provided. Either unset it or provide a valid key.",
                ));
            }
        }

        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 300 {
            return Err(TripSmithError::config(
                "Provider timeout must be between 1 and 300 seconds",
            ));
        }

        if self.cache.ttl_seconds == 0 {
            return Err(TripSmithError::config("Cache TTL must be positive"));
        }

        if self.defaults.search_radius_m == 0 || self.defaults.search_radius_m > 100_000 {
            return Err(TripSmithError::config(
                "Search radius must be between 1 m and 100 km",
            ));
        }

        if self.defaults.max_stay_options == 0 {
            return Err(TripSmithError::config(
                "Maximum stay options must be positive",
            ));
        }

        Ok(())
    }
}

fn read_env_u64(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| TripSmithError::config(format!("{name} must be a non-negative integer"))),
        Err(_) => Ok(None),
    }
}
