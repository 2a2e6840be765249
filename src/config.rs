//! Client configuration.
//!
//! A [`ClientConfig`] is owned by the transport behind an async lock. Each
//! request snapshots it when it starts, so edits made through
//! [`TikwmHttp::update_config`](crate::http::TikwmHttp::update_config) apply to
//! the next request and never to one already in flight.

use std::time::Duration;

use crate::error::{SdkError, SdkResult};
use crate::network::{
    DEFAULT_API_URL, DEFAULT_FALLBACK_URL, DEFAULT_PACING_INTERVAL, DEFAULT_TIMEOUT,
    MAX_USER_FEED_COUNT,
};

/// Environment variable names read by [`ClientConfig::from_env`].
pub mod env {
    pub const URL: &str = "TIKWM_URL";
    pub const FALLBACK_URL: &str = "TIKWM_FALLBACK_URL";
    pub const PACING_MS: &str = "TIKWM_PACING_MS";
    pub const MAX_USER_FEED_COUNT: &str = "TIKWM_MAX_USER_FEED_COUNT";
    pub const DEBUG: &str = "TIKWM_DEBUG";
    pub const TIMEOUT_SECS: &str = "TIKWM_TIMEOUT_SECS";
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Primary base URL, without the `/api` suffix.
    pub base_url: String,
    /// Mirror tried once after a transport failure against `base_url`.
    pub fallback_url: String,
    /// Minimum spacing between request starts. Zero disables pacing.
    pub pacing_interval: Duration,
    /// Page size cap used when streaming a user feed.
    pub max_user_feed_count: u32,
    /// Dump every response body through `tracing`.
    pub debug: bool,
    /// Per-attempt HTTP timeout.
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            pacing_interval: DEFAULT_PACING_INTERVAL,
            max_user_feed_count: MAX_USER_FEED_COUNT,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by any `TIKWM_*` environment variables that are set.
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(env::URL) {
            config.base_url = normalize_url(&url);
        }
        if let Some(url) = lookup(env::FALLBACK_URL) {
            config.fallback_url = normalize_url(&url);
        }
        if let Some(ms) = lookup(env::PACING_MS) {
            config.pacing_interval = Duration::from_millis(parse_var(env::PACING_MS, &ms)?);
        }
        if let Some(count) = lookup(env::MAX_USER_FEED_COUNT) {
            config.max_user_feed_count = parse_var(env::MAX_USER_FEED_COUNT, &count)?;
        }
        if let Some(flag) = lookup(env::DEBUG) {
            config.debug = parse_flag(env::DEBUG, &flag)?;
        }
        if let Some(secs) = lookup(env::TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_var(env::TIMEOUT_SECS, &secs)?);
        }

        Ok(config)
    }

    /// Whether requests go through the pacer.
    pub fn is_paced(&self) -> bool {
        !self.pacing_interval.is_zero()
    }
}

pub(crate) fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> SdkResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| SdkError::Config(format!("{}={:?}: {}", name, value, e)))
}

fn parse_flag(name: &str, value: &str) -> SdkResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SdkError::Config(format!(
            "{}={:?}: expected a boolean flag",
            name, other
        ))),
    }
}
