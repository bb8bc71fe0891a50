//! Host-name lookup for absolute URLs.
//!
//! `_url` routes are prefixed with `http://` and the current host name. The
//! [`HostProvider`] trait supplies that name: [`StaticHost`] always returns
//! the configured server name, and [`RequestHost`] reads it from the headers
//! of the request being served.

use http::header::{HeaderMap, HOST};

/// The host name used when none can be determined.
pub const DEFAULT_HOST: &str = "localhost";

/// Supplies the host name for absolute URLs.
pub trait HostProvider: Send + Sync {
    /// Returns the current host name (e.g. `example.com`).
    fn current_host(&self) -> String;
}

impl<F> HostProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current_host(&self) -> String {
        self()
    }
}

/// A fixed host name, typically the configured server name.
///
/// # Examples
///
/// ```
/// use named_routes_urls::host::{HostProvider, StaticHost};
///
/// let host = StaticHost::new("example.com");
/// assert_eq!(host.current_host(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost(String);

impl StaticHost {
    /// Creates a provider that always returns `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl HostProvider for StaticHost {
    fn current_host(&self) -> String {
        self.0.clone()
    }
}

/// The host of an incoming HTTP request.
///
/// Uses the `Host` header when present and readable, otherwise the fallback
/// (usually the configured server name).
///
/// # Examples
///
/// ```
/// use http::header::{HeaderMap, HeaderValue, HOST};
/// use named_routes_urls::host::{HostProvider, RequestHost};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(HOST, HeaderValue::from_static("shop.example.com:8080"));
///
/// let host = RequestHost::from_headers(&headers, "localhost");
/// assert_eq!(host.current_host(), "shop.example.com:8080");
///
/// let host = RequestHost::from_headers(&HeaderMap::new(), "fallback.example.com");
/// assert_eq!(host.current_host(), "fallback.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost {
    host: String,
}

impl RequestHost {
    /// Reads the host from request headers, using `fallback` when absent.
    pub fn from_headers(headers: &HeaderMap, fallback: &str) -> Self {
        let host = headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback);
        Self {
            host: host.to_string(),
        }
    }
}

impl HostProvider for RequestHost {
    fn current_host(&self) -> String {
        self.host.clone()
    }
}
