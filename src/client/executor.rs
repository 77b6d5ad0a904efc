//! Single-request execution.
//!
//! [`RequestExecutor`] builds and transmits exactly one HTTP request for an
//! already-resolved target URI. It owns header construction (content
//! negotiation plus the authentication header) and body serialization, and
//! maps transport failures into the [`FetchError`] taxonomy. All resilience
//! (redirect following, retries, budgets) lives one level up in
//! [`ApiResponse`](crate::ApiResponse); none of it is here.

use crate::client::config::ClientConfig;
use crate::error::{FetchError, Result};
use crate::types::{ApiRequest, RawResponse};
use http::header;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Builds and sends one HTTP request.
///
/// A fresh transport client is constructed per call with redirect handling
/// disabled, so the caller observes every hop, and with connection reuse
/// turned off, so the socket is released before `send` returns.
#[derive(Debug)]
pub struct RequestExecutor<'a> {
    config: &'a ClientConfig,
}

impl<'a> RequestExecutor<'a> {
    /// Create an executor using the given configuration.
    pub fn new(config: &'a ClientConfig) -> Self {
        RequestExecutor { config }
    }

    /// Execute one request against `target` and return the raw response.
    ///
    /// Headers sent:
    /// - `Accept: application/json`, always;
    /// - `Content-Type: application/json`, iff the request carries a body;
    /// - the auth scheme's single header, if any;
    /// - `User-Agent` from the configuration.
    ///
    /// Transport security follows the URI scheme: `https` targets are sent
    /// over TLS, anything else in plaintext.
    ///
    /// # Errors
    ///
    /// Returns a classified [`FetchError`] on connection-level failure,
    /// distinguishing refused from unreachable hosts and open timeouts.
    pub fn send(&self, target: &str, request: &ApiRequest) -> Result<RawResponse> {
        let url = Url::parse(target)
            .map_err(|e| FetchError::InvalidUrl(format!("{target}: {e}")))?;

        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(Duration::from_millis(self.config.connect_timeout_ms))
            .timeout(Duration::from_millis(self.config.request_timeout_ms))
            .pool_max_idle_per_host(0)
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let mut builder = client
            .request(request.method().clone(), url)
            .header(header::ACCEPT, "application/json");

        if let Some((name, value)) = request.auth().header_pair() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body() {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(body)?);
        }

        tracing::debug!(method = %request.method(), url = target, "sending request");

        let response = builder
            .send()
            .map_err(|e| FetchError::classify(&e, target))?;

        let status = response.status();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(RawResponse::new(status, headers, body))
    }
}
