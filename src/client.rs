//! High-level client — `TikwmClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::time::Duration;

use crate::config::{normalize_url, ClientConfig};
use crate::domain::post::client::Posts;
use crate::domain::user::client::Users;
use crate::error::SdkError;
use crate::http::TikwmHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::post::client::Posts as PostsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors: `client.posts()`, `client.users()`.
/// Clones share one transport, so pacing holds across all of them.
#[derive(Debug, Clone)]
pub struct TikwmClient {
    pub(crate) http: TikwmHttp,
}

impl TikwmClient {
    /// Client with the default configuration.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn builder() -> TikwmClientBuilder {
        TikwmClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    /// The transport, for raw `fetch_raw` / `fetch_typed` calls and config edits.
    pub fn http(&self) -> &TikwmHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct TikwmClientBuilder {
    config: ClientConfig,
}

impl TikwmClientBuilder {
    /// Start from an existing configuration, e.g. [`ClientConfig::from_env`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = normalize_url(url);
        self
    }

    pub fn fallback_url(mut self, url: &str) -> Self {
        self.config.fallback_url = normalize_url(url);
        self
    }

    /// Minimum spacing between request starts. `Duration::ZERO` disables pacing.
    pub fn pacing_interval(mut self, interval: Duration) -> Self {
        self.config.pacing_interval = interval;
        self
    }

    pub fn max_user_feed_count(mut self, count: u32) -> Self {
        self.config.max_user_feed_count = count;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.config.user_agent = Some(agent.to_string());
        self
    }

    pub fn build(self) -> Result<TikwmClient, SdkError> {
        let mut config = self.config;
        config.base_url = normalize_url(&config.base_url);
        config.fallback_url = normalize_url(&config.fallback_url);

        Ok(TikwmClient {
            http: TikwmHttp::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation_uses_defaults() {
        let client = TikwmClient::new().unwrap();
        assert_eq!(client.http().config().await, ClientConfig::default());
    }

    #[tokio::test]
    async fn test_client_builder() {
        let client = TikwmClient::builder()
            .base_url("http://primary.local/")
            .fallback_url("http://mirror.local")
            .pacing_interval(Duration::ZERO)
            .max_user_feed_count(10)
            .debug(true)
            .timeout(Duration::from_secs(5))
            .user_agent("tikwm-test")
            .build()
            .unwrap();

        let config = client.http().config().await;
        assert_eq!(config.base_url, "http://primary.local");
        assert_eq!(config.fallback_url, "http://mirror.local");
        assert!(!config.is_paced());
        assert_eq!(config.max_user_feed_count, 10);
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent.as_deref(), Some("tikwm-test"));
    }

    #[tokio::test]
    async fn test_builder_from_config() {
        let config = ClientConfig {
            base_url: "http://env.local/".to_string(),
            ..ClientConfig::default()
        };
        let client = TikwmClient::builder().config(config).build().unwrap();
        assert_eq!(client.http().config().await.base_url, "http://env.local");
    }
}
