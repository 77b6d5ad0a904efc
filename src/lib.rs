#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # json_api_http: single-shot JSON HTTP requests
//!
//! This crate issues one JSON-oriented HTTP request at a time, follows
//! redirects up to a bound, applies one of several authentication schemes,
//! and exposes the response body, status code, and status message through
//! infallible, lazily-resolved accessors.
//!
//! ## Overview
//!
//! A request is described once with [`ApiRequest`] and resolved by
//! [`ApiResponse`]:
//!
//! 1. **Normalization** - a scheme-less target is fetched over `https`
//! 2. **Execution** - exactly one request per hop, built by
//!    [`RequestExecutor`](client::RequestExecutor)
//! 3. **Classification** - each hop either terminates, follows a redirect,
//!    or retries a transient failure against a shared budget
//! 4. **Memoization** - the terminal [`FetchOutcome`] is cached; accessors
//!    never touch the network twice
//!
//! Failures never escape to the caller: an unreachable resolution yields a
//! sentinel outcome shaped like a not-found response (code `"404"`, body
//! `"{}"`), and malformed or `null` bodies decode to an empty JSON object.
//!
//! ## Client Usage
//!
//! ```ignore
//! use json_api_http::{ApiRequest, ApiResponse, AuthScheme, Method};
//! use serde_json::json;
//!
//! let request = ApiRequest::new("api.example.com/v1/widgets")
//!     .with_method(Method::POST)
//!     .with_body(json!({ "name": "sprocket" }))
//!     .with_auth(AuthScheme::Bearer { token: "token1234".into() });
//!
//! let response = ApiResponse::new(request);
//! println!("status: {} {}", response.code(), response.message());
//! println!("payload: {}", response.body());
//! ```
//!
//! ## Concurrency Model
//!
//! Fully synchronous, blocking I/O. One `ApiResponse` serves one logical
//! request and holds no shared mutable state; callers wanting parallelism
//! run independent instances on their own threads.
//!
//! ## Module Structure
//!
//! - **[types]** - Request/response types ([`ApiRequest`], [`AuthScheme`],
//!   [`RawResponse`], [`FetchOutcome`])
//! - **[error]** - Error taxonomy and result handling
//! - **[client]** - Resolution loop, request executor, configuration

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiResponse, ClientConfig};
pub use error::{FetchError, Result};
pub use types::{ApiRequest, AuthScheme, FetchOutcome, Method, RawResponse};
