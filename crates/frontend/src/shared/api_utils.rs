//! API utilities for admin-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the admin API listens on when the base is derived from the page URL
pub const API_PORT: u16 = 8104;

/// Get the base URL for API requests
///
/// A base baked in at compile time through `ADMIN_API_BASE` wins. Otherwise
/// the base is built from the current window location on port 8104.
///
/// # Returns
/// - API base URL like "http://localhost:8104/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/api", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/consultation/filter");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encodes a record id for use as a path segment
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_uses_admin_port() {
        assert_eq!(
            base_from_location("https:", "admin.example.com"),
            "https://admin.example.com:8104/api"
        );
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("http://h:8104/api/", "/user/1"), "http://h:8104/api/user/1");
        assert_eq!(join_url("http://h:8104/api", "user"), "http://h:8104/api/user");
    }

    #[test]
    fn segment_escapes_reserved_characters() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("42"), "42");
    }
}
