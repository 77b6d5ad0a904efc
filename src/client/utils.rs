//! Utility functions for the client.

/// Normalize a caller-supplied target URL.
///
/// If the input does not already begin with `http` (case-sensitive, first
/// four characters), it is fetched over TLS: `https://` is prepended.
/// Applied exactly once to the original input; redirect targets arrive
/// absolute and are used as-is.
///
/// # Examples
///
/// ```
/// use json_api_http::client::normalize_target;
///
/// assert_eq!(normalize_target("example.com"), "https://example.com");
/// assert_eq!(normalize_target("http://example.com"), "http://example.com");
/// assert_eq!(normalize_target("https://example.com"), "https://example.com");
/// ```
pub fn normalize_target(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_scheme_when_missing() {
        assert_eq!(
            normalize_target("www.example.com"),
            "https://www.example.com"
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(
            normalize_target("http://www.example.com"),
            "http://www.example.com"
        );
        assert_eq!(
            normalize_target("https://www.example.com"),
            "https://www.example.com"
        );
    }

    #[test]
    fn test_prefix_check_is_case_sensitive() {
        assert_eq!(
            normalize_target("HTTP://example.com"),
            "https://HTTP://example.com"
        );
    }

    #[test]
    fn test_short_input() {
        assert_eq!(normalize_target("ab"), "https://ab");
    }
}
