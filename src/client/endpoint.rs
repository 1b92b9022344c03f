//! Endpoint normalization for algod and indexer base URLs.
//!
//! Profiles store a URL and a port separately, and users type either half in
//! many shapes (`localhost`, `http://localhost/`, `https://host:8443`). The
//! same rules apply to both clients:
//!
//! - surrounding whitespace and trailing slashes are stripped;
//! - with a scheme, the port is appended only if it is non-empty, not a
//!   default port (`443`/`80`), and the URL does not already carry one;
//! - without a scheme, the port is always appended.

/// Joins a profile URL and port into a base endpoint.
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize_endpoint("https://example.com/", "443"), "https://example.com");
/// assert_eq!(normalize_endpoint("localhost", "4001"), "localhost:4001");
/// ```
#[must_use]
pub fn normalize_endpoint(url: &str, port: &str) -> String {
    let base = trim_slash(url);

    if !has_scheme(base) {
        return format!("{base}:{port}");
    }

    if !port.is_empty() && !has_explicit_port(base) && port != "443" && port != "80" {
        return format!("{base}:{port}");
    }

    base.to_string()
}

/// Turns a normalized endpoint into an address reqwest can call.
///
/// Scheme-less endpoints are requested over plain HTTP.
#[must_use]
pub fn request_base(endpoint: &str) -> String {
    if has_scheme(endpoint) {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}

fn trim_slash(s: &str) -> &str {
    s.trim().trim_end_matches('/')
}

fn has_scheme(s: &str) -> bool {
    s.contains("://")
}

/// A port is present when a colon follows the `://` separator.
fn has_explicit_port(url: &str) -> bool {
    let host_start = url.find("://").map_or(0, |i| i + 3);
    url[host_start..].contains(':')
}
