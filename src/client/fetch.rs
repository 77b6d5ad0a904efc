//! Redirect-following request resolution.
//!
//! Provides the primary [`ApiResponse`], which resolves one logical request
//! into a single authoritative [`FetchOutcome`], transparently following
//! redirects and tolerating transient network failures while guaranteeing
//! termination.
//!
//! # Examples
//!
//! ## Simple GET request
//!
//! ```ignore
//! use json_api_http::{ApiRequest, ApiResponse};
//!
//! let response = ApiResponse::new(ApiRequest::new("api.example.com/widgets"));
//! println!("status: {} {}", response.code(), response.message());
//! println!("payload: {}", response.body());
//! ```
//!
//! ## POST with a body and bearer auth
//!
//! ```ignore
//! use json_api_http::{ApiRequest, ApiResponse, AuthScheme, Method};
//! use serde_json::json;
//!
//! let request = ApiRequest::new("https://api.example.com/widgets")
//!     .with_method(Method::POST)
//!     .with_body(json!({ "name": "sprocket" }))
//!     .with_auth(AuthScheme::Bearer { token: "token1234".into() });
//!
//! let response = ApiResponse::new(request);
//! assert_eq!(response.code(), "201");
//! ```
//!
//! # Resolution
//!
//! Resolution runs as a bounded loop, not recursion. Every iteration issues
//! one request and classifies the outcome into a step:
//!
//! | Observation | Step | Budget |
//! |-------------|------|--------|
//! | 3xx with `Location` | follow the new target | −1 |
//! | host unreachable / open timeout | retry the same target | −1 |
//! | connection refused, other fatal failure | sentinel `"Host not found"` | unchanged |
//! | anything else (2xx/4xx/5xx, 3xx without `Location`) | terminal | unchanged |
//!
//! The budget is shared between redirects and retries, so a target that
//! alternates between the two still terminates. When it reaches zero the
//! loop yields the sentinel `"Too Many Redirects"`.

use crate::client::config::ClientConfig;
use crate::client::executor::RequestExecutor;
use crate::client::utils::normalize_target;
use crate::error::FetchError;
use crate::types::{ApiRequest, FetchOutcome, RawResponse, HOST_NOT_FOUND, TOO_MANY_REDIRECTS};
use serde_json::Value;
use std::sync::OnceLock;

/// A lazily-resolved response to one logical JSON request.
///
/// Created per request; the first accessor call performs the network
/// resolution and the result is memoized for the instance's lifetime, so
/// every accessor is idempotent and no further network activity occurs.
///
/// Accessors never fail: connection-level problems and exhausted redirect
/// budgets surface as a sentinel outcome with code `"404"` (see
/// [`FetchOutcome`]), and unparseable bodies decode to an empty JSON
/// object.
pub struct ApiResponse {
    request: ApiRequest,
    config: ClientConfig,
    outcome: OnceLock<FetchOutcome>,
}

impl ApiResponse {
    /// Create a response for `request` with the default configuration.
    pub fn new(request: ApiRequest) -> Self {
        Self::with_config(request, ClientConfig::default())
    }

    /// Create a response for `request` with a custom configuration.
    pub fn with_config(request: ApiRequest, config: ClientConfig) -> Self {
        ApiResponse {
            request,
            config,
            outcome: OnceLock::new(),
        }
    }

    /// The resolved outcome, fetching it on first call.
    pub fn outcome(&self) -> &FetchOutcome {
        self.outcome
            .get_or_init(|| resolve(&self.request, &self.config))
    }

    /// Status code of the resolved outcome, e.g. `"200"`.
    pub fn code(&self) -> &str {
        self.outcome().code()
    }

    /// Status message of the resolved outcome: the reason phrase for a real
    /// response, the failure description for a sentinel.
    pub fn message(&self) -> &str {
        self.outcome().message()
    }

    /// The unparsed response body.
    pub fn body_raw(&self) -> &str {
        self.outcome().body_raw()
    }

    /// The response body decoded as JSON.
    ///
    /// On parse failure (including the empty string) or when the body is
    /// the JSON literal `null`, returns an empty object `{}`. Callers
    /// always get a usable value, never an error.
    pub fn body(&self) -> Value {
        match serde_json::from_str::<Value>(self.body_raw()) {
            Ok(Value::Null) | Err(_) => Value::Object(serde_json::Map::new()),
            Ok(value) => value,
        }
    }
}

impl std::fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("request", &self.request)
            .field("resolved", &self.outcome.get().is_some())
            .finish()
    }
}

/// One classified observation in the resolution loop.
#[derive(Debug)]
enum Step {
    /// A response to return as-is.
    Terminal(RawResponse),
    /// A redirect to follow at the given absolute target.
    Follow(String),
    /// A transient failure; try the same target again.
    Retry,
    /// A fatal failure; yield a sentinel with this message.
    Abort(&'static str),
}

/// Resolve `request` into a terminal outcome.
///
/// The target is normalized exactly once, before the first request; every
/// subsequent target comes from a `Location` header and is used verbatim.
fn resolve(request: &ApiRequest, config: &ClientConfig) -> FetchOutcome {
    let executor = RequestExecutor::new(config);
    let mut target = normalize_target(request.url());
    let mut remaining = config.redirect_budget;

    loop {
        if remaining == 0 {
            tracing::warn!(url = %target, "redirect budget exhausted");
            return FetchOutcome::sentinel(TOO_MANY_REDIRECTS);
        }

        let step = match executor.send(&target, request) {
            Ok(response) => classify_response(response),
            Err(err) => classify_failure(&err),
        };

        match step {
            Step::Terminal(response) => return FetchOutcome::Origin(response),
            Step::Follow(next) => {
                tracing::debug!(from = %target, to = %next, remaining, "following redirect");
                target = next;
                remaining -= 1;
            }
            Step::Retry => {
                tracing::warn!(url = %target, remaining, "transient failure, retrying");
                remaining -= 1;
            }
            Step::Abort(message) => {
                tracing::warn!(url = %target, reason = message, "resolution failed");
                return FetchOutcome::sentinel(message);
            }
        }
    }
}

/// Classify a received response.
///
/// A 3xx with a `Location` header is followed. A 3xx without one has
/// nowhere to go and is returned as terminal. Everything else, success or
/// not, is terminal; status-code semantics are the caller's concern.
fn classify_response(response: RawResponse) -> Step {
    if !response.is_redirect() {
        return Step::Terminal(response);
    }
    match response.location() {
        Some(location) => Step::Follow(location.to_string()),
        None => Step::Terminal(response),
    }
}

/// Classify a connection-level failure.
///
/// Unreachable hosts and open timeouts are worth another attempt at the
/// same target; anything else ends resolution with the not-found sentinel.
fn classify_failure(err: &FetchError) -> Step {
    if err.is_retryable() {
        Step::Retry
    } else {
        Step::Abort(HOST_NOT_FOUND)
    }
}
