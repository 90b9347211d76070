//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Make a server-provided URL absolute
///
/// The backend returns print/document links as paths ("/api/...");
/// absolute URLs are passed through unchanged.
pub fn absolute_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), url)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), url)
    }
}

/// Open a URL in a new browser tab
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::error!("failed to open {}: {:?}", url, e);
            }
        }
        None => log::warn!("no window to open {}", url),
    }
}
