//! API Configuration
//!
//! Build-time selection of the backend origin.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Local development backend
pub const DEV_BASE_URL: &str = "http://localhost:5000";

/// Header that lets requests through the tunnel's browser interstitial
pub const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a query value
const QUERY: &AsciiSet = &SEGMENT.add(b'&').add(b'=').add(b'+');

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin prefixed to relative paths, without a trailing slash
    pub base_url: String,
    /// Send the tunnel bypass header with every request
    pub tunnel_bypass: bool,
}

impl ApiConfig {
    /// Resolve the base URL for this build.
    ///
    /// `WORKFORCE_API_URL` wins when set at compile time. Otherwise debug
    /// builds talk to the local backend and release builds to the page origin.
    pub fn from_env() -> Self {
        Self::resolve(
            option_env!("WORKFORCE_API_URL"),
            cfg!(debug_assertions),
            page_origin,
        )
    }

    pub fn with_base(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tunnel_bypass: true,
        }
    }

    fn resolve(configured: Option<&str>, debug: bool, origin: impl FnOnce() -> Option<String>) -> Self {
        match configured.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::with_base(url),
            None if debug => Self::with_base(DEV_BASE_URL),
            None => Self::with_base(origin().unwrap_or_default()),
        }
    }

    /// Absolute URLs pass through untouched
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Link to an uploaded account image (`profile`, `certificate`, ...)
    pub fn image_url(&self, email: &str, kind: &str) -> String {
        self.url(&format!("/api/get_image/{}/{}", segment(email), segment(kind)))
    }
}

/// Percent-encode one path segment
pub fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Percent-encode one query value
pub fn query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY).to_string()
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_build_uses_local_backend() {
        let config = ApiConfig::resolve(None, true, || Some("https://admin.example".into()));
        assert_eq!(config.base_url, DEV_BASE_URL);
        assert!(config.tunnel_bypass);
    }

    #[test]
    fn test_release_build_uses_page_origin() {
        let config = ApiConfig::resolve(None, false, || Some("https://admin.example".into()));
        assert_eq!(config.base_url, "https://admin.example");
    }

    #[test]
    fn test_configured_url_wins() {
        let config = ApiConfig::resolve(Some("https://tunnel.example/ "), true, || None);
        assert_eq!(config.base_url, "https://tunnel.example");
    }

    #[test]
    fn test_blank_configured_url_is_ignored() {
        let config = ApiConfig::resolve(Some("  "), true, || None);
        assert_eq!(config.base_url, DEV_BASE_URL);
    }

    #[test]
    fn test_url_joins_relative_paths_only() {
        let config = ApiConfig::with_base("http://localhost:5000/");
        assert_eq!(config.url("/api/region/"), "http://localhost:5000/api/region/");
        assert_eq!(config.url("https://other.example/x"), "https://other.example/x");
    }

    #[test]
    fn test_image_url_encodes_email() {
        let config = ApiConfig::with_base("http://localhost:5000");
        assert_eq!(
            config.image_url("a b@x.com", "profile"),
            "http://localhost:5000/api/get_image/a%20b@x.com/profile"
        );
    }

    #[test]
    fn test_query_value_escapes_separators() {
        assert_eq!(query_value("WO 1&x=2"), "WO%201%26x%3D2");
    }
}
