//! Client configuration.

use serde::{Deserialize, Serialize};

/// Tunables for request resolution.
///
/// # Examples
///
/// ```
/// use json_api_http::ClientConfig;
///
/// let config = ClientConfig {
///     redirect_budget: 3,
///     ..Default::default()
/// };
/// assert_eq!(config.redirect_budget, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Maximum number of additional hops (redirects plus unreachable-host
    /// retries combined) before resolution gives up.
    pub redirect_budget: u32,
    /// Timeout for opening the connection, in milliseconds. An open
    /// timeout is treated as transient by the resolution loop.
    pub connect_timeout_ms: u64,
    /// Overall timeout for one request, in milliseconds.
    pub request_timeout_ms: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            redirect_budget: 10,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            user_agent: default_user_agent(),
        }
    }
}

/// `<crate>/<version>`, stamped from the package metadata.
pub(crate) fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
