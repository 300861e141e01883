//! # Client configuration — `forward.toml`
//!
//! The web crate embeds a `forward.toml` at build time and parses it into a
//! [`ClientConfig`]. Every field has a default, so a missing or partial file is
//! equivalent to the defaults below.
//!
//! ```toml
//! [api]
//! prefix = "/api"
//! csrf_cookie = "csrftoken"
//! csrf_header = "X-CSRFToken"
//! # origin = "http://localhost:8080"   # only used outside the browser
//!
//! [layout]
//! desktop_min_width = 1024
//!
//! [session]
//! storage_key = "reduxState"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `forward.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the REST API lives and how requests are authenticated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Path prefix prepended to every endpoint.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Name of the cookie holding the CSRF token.
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
    /// Request header the token is echoed in.
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
    /// Origin used when there is no browser window to ask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            csrf_cookie: default_csrf_cookie(),
            csrf_header: default_csrf_header(),
            origin: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Windows strictly wider than this get the desktop chrome.
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: u32,
}

fn default_desktop_min_width() -> u32 {
    1024
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: default_desktop_min_width(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Local storage key the cached session lives under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "reduxState".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "forward.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether a window of `width` pixels gets the desktop layout.
    pub fn is_desktop(&self, width: u32) -> bool {
        width > self.layout.desktop_min_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.api.csrf_cookie, "csrftoken");
        assert_eq!(config.api.csrf_header, "X-CSRFToken");
        assert_eq!(config.session.storage_key, "reduxState");
        assert!(config.api.origin.is_none());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            origin = "http://localhost:8080"

            [layout]
            desktop_min_width = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.api.origin.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.layout.desktop_min_width, 800);
        assert_eq!(config.session.storage_key, "reduxState");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.api.prefix = "/v2".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_desktop_breakpoint_is_exclusive() {
        let config = ClientConfig::default();
        assert!(!config.is_desktop(1024));
        assert!(config.is_desktop(1025));
        assert!(!config.is_desktop(375));
    }
}
