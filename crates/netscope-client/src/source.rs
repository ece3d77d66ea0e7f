//! Snapshot transport seam
//!
//! The fetch pipeline only needs "GET this URL, give me JSON". Hiding the
//! transport behind a trait keeps the dashboard logic testable without a
//! live orchestrator.

use std::time::Duration;

use netscope_core::prelude::*;
use serde_json::Value;

/// Default per-request timeout for the HTTP transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Async source of JSON snapshots.
#[trait_variant::make(SnapshotSource: Send)]
pub trait LocalSnapshotSource {
    /// GET `url` and parse the response body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// HTTP transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;
        if !resp.status().is_success() {
            return Err(Error::fetch(url, format!("HTTP {}", resp.status())));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))
    }
}

/// In-memory source for tests: canned JSON per URL, everything else fails.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    responses: std::collections::HashMap<String, Value>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a canned response for an exact URL.
    pub fn respond(mut self, url: impl Into<String>, value: Value) -> Self {
        self.responses.insert(url.into(), value);
        self
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl SnapshotSource for FakeSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::fetch(url, "connection refused"))
    }
}
