//! Fetch a JSON document and print it.
//!
//! Run with: cargo run --example fetch_json -- <url>
//!
//! The URL may omit its scheme; scheme-less targets go over https.

use anyhow::Result;
use json_api_http::{ApiRequest, ApiResponse, AuthScheme};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "httpbin.org/json".to_string());

    let mut request = ApiRequest::new(&target);
    if let Ok(token) = std::env::var("API_TOKEN") {
        request = request.with_auth(AuthScheme::Bearer { token });
    }

    let response = ApiResponse::new(request);

    println!("GET {target}");
    println!("status: {} {}", response.code(), response.message());
    println!("{}", serde_json::to_string_pretty(&response.body())?);

    Ok(())
}
