//! Error types and result handling.
//!
//! All connection-level failures the transport can surface are folded into
//! the closed [`FetchError`] taxonomy here. The resolution loop consumes
//! these values to decide between retrying, giving up, or surfacing a
//! sentinel; none of them escape the public accessors.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failures that can occur while executing a single request.
///
/// The variants carrying a `String` hold the target URI (or the transport's
/// own description) purely for diagnostics.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote host actively rejected the connection. Fatal.
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    /// The host could not be reached at the network layer. Transient.
    #[error("host unreachable: {0}")]
    HostUnreachable(String),

    /// Opening the connection timed out. Transient.
    #[error("connection timed out: {0}")]
    OpenTimeout(String),

    /// The target could not be parsed as a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Any other transport-level failure (DNS, TLS, protocol).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request body could not be serialized to JSON.
    #[error("body serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the resolution loop may retry the same target after this
    /// failure. Only unreachable hosts and open timeouts qualify; a refusal
    /// is authoritative.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FetchError::HostUnreachable(_) | FetchError::OpenTimeout(_)
        )
    }

    /// Map a transport error to the taxonomy.
    ///
    /// Timeouts are checked first since a connect timeout also reports as a
    /// connection error. Connection errors are refined by walking the error
    /// chain down to the underlying I/O error kind.
    pub(crate) fn classify(err: &reqwest::Error, target: &str) -> FetchError {
        if err.is_timeout() {
            return FetchError::OpenTimeout(target.to_string());
        }
        if err.is_connect() {
            return match io_error_kind(err) {
                Some(std::io::ErrorKind::ConnectionRefused) => {
                    FetchError::ConnectionRefused(target.to_string())
                }
                Some(std::io::ErrorKind::HostUnreachable)
                | Some(std::io::ErrorKind::NetworkUnreachable) => {
                    FetchError::HostUnreachable(target.to_string())
                }
                _ => FetchError::Transport(err.to_string()),
            };
        }
        FetchError::Transport(err.to_string())
    }
}

/// Walk an error's source chain to the first `std::io::Error` and return
/// its kind. The transport wraps socket errors several layers deep.
fn io_error_kind(err: &(dyn std::error::Error + 'static)) -> Option<std::io::ErrorKind> {
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io) = inner.downcast_ref::<std::io::Error>() {
            return Some(io.kind());
        }
        source = inner.source();
    }
    None
}
