//! Outbound HTTP client with per-call timeout and bounded retry.
//!
//! By default only failures where the request never reached the upstream
//! (connect errors, connect timeouts) are retried. Read timeouts are retried
//! only when `retry_read_timeouts` is set, since the upstream may already
//! have acted on the POST. Redirects are not followed. Any HTTP response,
//! whatever its status, is returned to the caller so the stage gates can
//! judge it.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::warn;

use crate::error::PipelineError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Also retry requests that timed out after being sent.
    pub retry_read_timeouts: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 250,
            max_delay_ms: 2_000,
            retry_read_timeouts: false,
        }
    }
}

impl RetryPolicy {
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(16);
        let multiplier = 1_u64 << exponent;
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(multiplier)
            .min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }

    fn is_retryable(&self, e: &reqwest::Error) -> bool {
        e.is_connect() || (self.retry_read_timeouts && e.is_timeout())
    }
}

/// Raw upstream reply. The body is kept as text so callers can tell an
/// empty body apart from one that is not JSON.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// Shared outbound client. `reqwest::Client` is a connection pool, so one
/// instance serves every request.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl UpstreamClient {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, retry })
    }

    /// POST a JSON body, optionally with a bearer credential.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        bearer: Option<&SecretString>,
    ) -> Result<UpstreamReply, PipelineError> {
        self.send_with_retry(url, || {
            let mut req = self.client.post(url).json(body);
            if let Some(token) = bearer {
                req = req.bearer_auth(token.expose_secret());
            }
            req
        })
        .await
    }

    /// DELETE a resource, optionally with a bearer credential.
    pub async fn delete(
        &self,
        url: &str,
        bearer: Option<&SecretString>,
    ) -> Result<UpstreamReply, PipelineError> {
        self.send_with_retry(url, || {
            let mut req = self.client.delete(url);
            if let Some(token) = bearer {
                req = req.bearer_auth(token.expose_secret());
            }
            req
        })
        .await
    }

    async fn send_with_retry<F>(&self, url: &str, build: F) -> Result<UpstreamReply, PipelineError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match self.send_once(build()).await {
                Ok(reply) => return Ok(reply),
                Err(e) if self.retry.is_retryable(&e) && attempt < self.retry.max_retries => {
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        max_retries = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transient upstream failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn send_once(&self, req: reqwest::RequestBuilder) -> Result<UpstreamReply, reqwest::Error> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(UpstreamReply { status, body })
    }
}
