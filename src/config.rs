//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_MS;

/// Public API root; a team name is appended to it.
pub const DEFAULT_API_BASE: &str = "https://botisimo.com/api/v1/loyalty";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Team name, or a full endpoint URL starting with `http`
    pub team: String,
    /// API root used when `team` is a plain name
    pub api_base: String,
    /// Lifetime of cached GET responses in milliseconds
    pub cache_ttl_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Creates a config for `team` with default settings.
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }

    /// Creates a new ClientConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LOYALTY_TEAM` - Team name or endpoint URL (default: empty)
    /// - `LOYALTY_API_BASE` - API root (default: `https://botisimo.com/api/v1/loyalty`)
    /// - `LOYALTY_CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `LOYALTY_REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            team: env::var("LOYALTY_TEAM").unwrap_or(defaults.team),
            api_base: env::var("LOYALTY_API_BASE").unwrap_or(defaults.api_base),
            cache_ttl_ms: env::var("LOYALTY_CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_ms),
            request_timeout_secs: env::var("LOYALTY_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Overrides the cache TTL.
    pub fn with_cache_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.cache_ttl_ms = ttl_ms;
        self
    }

    /// The base URL every request path is joined onto.
    pub fn endpoint(&self) -> String {
        if self.team.starts_with("http") {
            self.team.clone()
        } else {
            format!("{}/{}", self.api_base.trim_end_matches('/'), self.team)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            team: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl_ms: DEFAULT_TTL_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
