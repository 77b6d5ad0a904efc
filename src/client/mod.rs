//! Synchronous JSON HTTP client implementation.
//!
//! This module provides the complete request pipeline, enabling callers to:
//!
//! - **Issue one JSON request** with method, body, and authentication
//! - **Follow redirects** up to a shared, bounded budget
//! - **Absorb connection failures** into a uniform sentinel outcome
//! - **Read the result lazily** through idempotent accessors
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch    - ApiResponse and redirect-following resolution
//! ├── executor - Single-request construction and transmission
//! ├── config   - Client configuration
//! └── utils    - Utility functions
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApiResponse`] | Lazily-resolved response to one logical request |
//! | [`RequestExecutor`] | Builds and sends exactly one HTTP request |
//! | [`ClientConfig`] | Resolution and transport configuration |
//!
//! # Examples
//!
//! ## Creating a response
//!
//! ```ignore
//! use json_api_http::{ApiRequest, ApiResponse, ClientConfig};
//!
//! // Default configuration
//! let response = ApiResponse::new(ApiRequest::new("api.example.com"));
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     redirect_budget: 3,
//!     ..Default::default()
//! };
//! let response = ApiResponse::with_config(ApiRequest::new("api.example.com"), config);
//! ```
//!
//! ## Normalizing targets
//!
//! ```
//! use json_api_http::client::normalize_target;
//!
//! assert_eq!(normalize_target("example.com"), "https://example.com");
//! assert_eq!(normalize_target("http://example.com"), "http://example.com");
//! ```

mod config;
mod executor;
mod fetch;
mod utils;

pub use config::ClientConfig;
pub use executor::RequestExecutor;
pub use fetch::ApiResponse;
pub use utils::*;
