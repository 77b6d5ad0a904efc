//! Core request/response types.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApiRequest`] | One logical JSON request (URL, method, body, auth) |
//! | [`AuthScheme`] | Closed set of supported authentication strategies |
//! | [`RawResponse`] | A response as returned by the transport |
//! | [`FetchOutcome`] | Terminal result of resolution: origin response or sentinel |
//!
//! # Examples
//!
//! ```
//! use json_api_http::{ApiRequest, AuthScheme, Method};
//! use serde_json::json;
//!
//! let request = ApiRequest::new("api.example.com/v1/widgets")
//!     .with_method(Method::POST)
//!     .with_body(json!({ "name": "sprocket" }))
//!     .with_auth(AuthScheme::Bearer { token: "token1234".into() });
//!
//! assert_eq!(request.method(), &Method::POST);
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use http::StatusCode;
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP method for a request. Re-exported from the underlying transport.
pub use reqwest::Method;

/// Authentication strategy for a single request.
///
/// Exactly one variant is active per request, decided at construction time.
/// Each variant expands to at most one request header via [`header_pair`].
///
/// [`header_pair`]: AuthScheme::header_pair
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// No authentication; no header is sent.
    #[default]
    None,
    /// HTTP Basic: `Authorization: Basic base64(user:password)`.
    Basic {
        /// Account name, placed before the colon.
        user: String,
        /// Account password, placed after the colon.
        password: String,
    },
    /// Bearer token: `Authorization: Bearer <token>`.
    Bearer {
        /// The opaque token, sent verbatim.
        token: String,
    },
    /// A caller-named header carrying the credential, sent instead of
    /// `Authorization` (for APIs using e.g. `X-Api-Key`).
    Header {
        /// Header name, sent as given.
        name: String,
        /// Header value, sent verbatim.
        value: String,
    },
}

impl AuthScheme {
    /// The single header this scheme contributes, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_api_http::AuthScheme;
    ///
    /// let auth = AuthScheme::Basic { user: "u".into(), password: "pass".into() };
    /// let (name, value) = auth.header_pair().unwrap();
    /// assert_eq!(name, "Authorization");
    /// assert_eq!(value, "Basic dTpwYXNz");
    ///
    /// assert!(AuthScheme::None.header_pair().is_none());
    /// ```
    pub fn header_pair(&self) -> Option<(String, String)> {
        match self {
            AuthScheme::None => None,
            AuthScheme::Basic { user, password } => {
                let credentials = STANDARD.encode(format!("{user}:{password}"));
                Some(("Authorization".to_string(), format!("Basic {credentials}")))
            }
            AuthScheme::Bearer { token } => {
                Some(("Authorization".to_string(), format!("Bearer {token}")))
            }
            AuthScheme::Header { name, value } => Some((name.clone(), value.clone())),
        }
    }
}

/// One logical JSON-oriented HTTP request.
///
/// Built once by the caller with the builder methods, then treated as
/// immutable. The URL may omit its scheme; a scheme-less target is fetched
/// over `https` (see [`crate::client::normalize_target`]).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    url: String,
    method: Method,
    body: Option<Value>,
    auth: AuthScheme,
}

impl ApiRequest {
    /// Create a GET request for `url` with no body and no authentication.
    pub fn new(url: impl Into<String>) -> Self {
        ApiRequest {
            url: url.into(),
            method: Method::GET,
            body: None,
            auth: AuthScheme::None,
        }
    }

    /// Set the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body. The body is serialized to text at send time and
    /// implies `Content-Type: application/json`.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the authentication scheme.
    #[must_use]
    pub fn with_auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// The target URL as supplied by the caller.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The authentication scheme.
    pub fn auth(&self) -> &AuthScheme {
        &self.auth
    }
}

/// A raw response as produced by the transport for one request.
///
/// Header names are stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: String,
}

impl RawResponse {
    /// Assemble a response from its parts. Header keys are lowercased on
    /// the way in.
    pub fn new(status: StatusCode, headers: BTreeMap<String, String>, body: String) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        RawResponse {
            status,
            headers,
            body,
        }
    }

    /// Numeric status code as a string, e.g. `"200"`.
    pub fn code(&self) -> &str {
        self.status.as_str()
    }

    /// Canonical reason phrase for the status, or `""` when unknown.
    pub fn message(&self) -> &str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The response body text, unmodified.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the status is a redirection (3xx).
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// The `Location` header, present on well-formed redirects.
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

/// The terminal result of resolving a request.
///
/// Resolution either ends on a real transport response ([`Origin`]) or on a
/// synthesized null response ([`Sentinel`]) when it cannot complete. The
/// sentinel deliberately mimics a not-found response (code `"404"`, body
/// `"{}"`) so callers always receive a uniform shape; the variant split
/// keeps the two cases distinguishable where it matters.
///
/// [`Origin`]: FetchOutcome::Origin
/// [`Sentinel`]: FetchOutcome::Sentinel
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// A real response from the origin server (any status, including 4xx/5xx).
    Origin(RawResponse),
    /// A synthesized response standing in for a failed resolution.
    Sentinel {
        /// Always `"404"`.
        code: String,
        /// Always `"{}"`.
        body: String,
        /// Why resolution failed, e.g. `"Too Many Redirects"`.
        message: String,
    },
}

/// Sentinel message when the redirect budget runs out.
pub const TOO_MANY_REDIRECTS: &str = "Too Many Redirects";

/// Sentinel message when the host refuses or cannot be reached at all.
pub const HOST_NOT_FOUND: &str = "Host not found";

impl FetchOutcome {
    /// Build the sentinel for a failed resolution.
    pub fn sentinel(message: impl Into<String>) -> Self {
        FetchOutcome::Sentinel {
            code: "404".to_string(),
            body: "{}".to_string(),
            message: message.into(),
        }
    }

    /// Status code as a string.
    pub fn code(&self) -> &str {
        match self {
            FetchOutcome::Origin(response) => response.code(),
            FetchOutcome::Sentinel { code, .. } => code,
        }
    }

    /// Status message: the reason phrase for an origin response, the
    /// failure description for a sentinel.
    pub fn message(&self) -> &str {
        match self {
            FetchOutcome::Origin(response) => response.message(),
            FetchOutcome::Sentinel { message, .. } => message,
        }
    }

    /// The unparsed body text.
    pub fn body_raw(&self) -> &str {
        match self {
            FetchOutcome::Origin(response) => response.body(),
            FetchOutcome::Sentinel { body, .. } => body,
        }
    }

    /// Whether this outcome was synthesized rather than received.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, FetchOutcome::Sentinel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_auth_header() {
        let auth = AuthScheme::Basic {
            user: "user".into(),
            password: "password".into(),
        };
        let (name, value) = auth.header_pair().unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, format!("Basic {}", STANDARD.encode("user:password")));
    }

    #[test]
    fn test_bearer_auth_header() {
        let auth = AuthScheme::Bearer {
            token: "token1234".into(),
        };
        let (name, value) = auth.header_pair().unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer token1234");
    }

    #[test]
    fn test_custom_header_auth() {
        let auth = AuthScheme::Header {
            name: "X-Header-Name".into(),
            value: "1234".into(),
        };
        assert_eq!(
            auth.header_pair(),
            Some(("X-Header-Name".to_string(), "1234".to_string()))
        );
    }

    #[test]
    fn test_no_auth_has_no_header() {
        assert!(AuthScheme::None.header_pair().is_none());
        assert_eq!(AuthScheme::default(), AuthScheme::None);
    }

    #[test]
    fn test_request_builder_defaults() {
        let request = ApiRequest::new("example.com");
        assert_eq!(request.url(), "example.com");
        assert_eq!(request.method(), &Method::GET);
        assert!(request.body().is_none());
        assert_eq!(request.auth(), &AuthScheme::None);
    }

    #[test]
    fn test_request_builder_full() {
        let request = ApiRequest::new("example.com")
            .with_method(Method::PUT)
            .with_body(json!({ "k": "v" }))
            .with_auth(AuthScheme::Bearer { token: "t".into() });
        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.body(), Some(&json!({ "k": "v" })));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = BTreeMap::new();
        headers.insert("Location".to_string(), "https://example.com/v2".to_string());
        let response = RawResponse::new(StatusCode::MOVED_PERMANENTLY, headers, String::new());

        assert_eq!(response.header("LOCATION"), Some("https://example.com/v2"));
        assert_eq!(response.location(), Some("https://example.com/v2"));
        assert!(response.is_redirect());
    }

    #[test]
    fn test_origin_outcome_accessors() {
        let response = RawResponse::new(StatusCode::OK, BTreeMap::new(), "{\"a\":1}".to_string());
        let outcome = FetchOutcome::Origin(response);
        assert_eq!(outcome.code(), "200");
        assert_eq!(outcome.message(), "OK");
        assert_eq!(outcome.body_raw(), "{\"a\":1}");
        assert!(!outcome.is_sentinel());
    }

    #[test]
    fn test_sentinel_outcome_shape() {
        let outcome = FetchOutcome::sentinel(TOO_MANY_REDIRECTS);
        assert_eq!(outcome.code(), "404");
        assert_eq!(outcome.body_raw(), "{}");
        assert_eq!(outcome.message(), "Too Many Redirects");
        assert!(outcome.is_sentinel());
    }
}
