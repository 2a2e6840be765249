//! Low-level HTTP client — `TikwmHttp`.
//!
//! Owns the reqwest client, the pacer and the live configuration. Endpoint
//! sub-clients build their query parameters and go through [`TikwmHttp::fetch_typed`];
//! nothing above this layer paces or retries.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_lock::RwLock;
use futures_util::FutureExt;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{HttpError, SdkResult};
use crate::http::envelope::{has_code, QueryParams, RawEnvelope};
use crate::http::pacer::Pacer;

/// Low-level HTTP client for the tikwm API.
///
/// Cloning is cheap; clones share the connection pool, the pacer and the
/// configuration.
#[derive(Debug, Clone)]
pub struct TikwmHttp {
    client: Client,
    config: Arc<RwLock<ClientConfig>>,
    pacer: Arc<Pacer>,
}

impl TikwmHttp {
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            config: Arc::new(RwLock::new(config)),
            pacer: Arc::new(Pacer::new()),
        })
    }

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> ClientConfig {
        self.config.read().await.clone()
    }

    /// Edit the configuration in place. Requests already in flight keep the
    /// snapshot they started with. The HTTP timeout and user agent are fixed
    /// when the client is built and are not affected.
    pub async fn update_config<F>(&self, edit: F)
    where
        F: FnOnce(&mut ClientConfig),
    {
        let mut config = self.config.write().await;
        edit(&mut config);
        config.base_url = crate::config::normalize_url(&config.base_url);
        config.fallback_url = crate::config::normalize_url(&config.fallback_url);
    }

    // ── Envelope endpoints ───────────────────────────────────────────────

    /// Fetch `method` and unwrap the envelope into `T`.
    pub async fn fetch_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &QueryParams,
    ) -> SdkResult<T> {
        let body = self.fetch_raw(method, params, None).await?;
        RawEnvelope::from_slice(&body)?.into_payload(method, params)
    }

    /// GET `<base>/api/<method>` and return the raw body.
    ///
    /// `base_url` defaults to the configured primary. A transport failure
    /// against anything other than the fallback URL is retried exactly once
    /// against the fallback.
    pub async fn fetch_raw(
        &self,
        method: &str,
        params: &QueryParams,
        base_url: Option<&str>,
    ) -> Result<Vec<u8>, HttpError> {
        let config = self.config().await;
        let base_url = base_url
            .map(crate::config::normalize_url)
            .unwrap_or_else(|| config.base_url.clone());

        with_fallback(&base_url, &config.fallback_url, method, params, |url| {
            catch_panic(self.do_request(&config, url, method, params))
        })
        .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn do_request(
        &self,
        config: &ClientConfig,
        base_url: &str,
        method: &str,
        params: &QueryParams,
    ) -> Result<Vec<u8>, HttpError> {
        if config.is_paced() {
            self.pacer.wait_turn(config.pacing_interval).await;
        }

        let url = format!("{}/api/{}", base_url, method);
        tracing::debug!(url = %url, method, "Sending request");

        let resp = self.client.get(&url).query(params).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if config.debug {
            tracing::info!(
                target: "tikwm::http",
                url = %url,
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "Response body"
            );
        }

        // An envelope is the upstream's answer whatever the status says.
        if !status.is_success() && !has_code(&body) {
            return Err(HttpError::Status {
                status: status.as_u16(),
                url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

/// Run `attempt` against `primary`, then once against `fallback` if that
/// failed and the two differ.
async fn with_fallback<'a, F, Fut>(
    primary: &'a str,
    fallback: &'a str,
    method: &str,
    params: &QueryParams,
    mut attempt: F,
) -> Result<Vec<u8>, HttpError>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<Vec<u8>, HttpError>>,
{
    match attempt(primary).await {
        Ok(body) => Ok(body),
        Err(e) if primary != fallback => {
            tracing::warn!(
                from = %primary,
                to = %fallback,
                method,
                query = ?params,
                error = %e,
                "Falling back to mirror"
            );
            attempt(fallback).await
        }
        Err(e) => Err(e),
    }
}

/// Await `request`, turning a panic raised while it runs into
/// [`HttpError::Panic`].
async fn catch_panic<Fut>(request: Fut) -> Result<Vec<u8>, HttpError>
where
    Fut: Future<Output = Result<Vec<u8>, HttpError>>,
{
    match AssertUnwindSafe(request).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(HttpError::Panic(panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text.to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
