//! # Client configuration — `gridsocial.toml`
//!
//! The web client embeds this file at compile time. It names the API origin
//! every request is sent to and the optional namespace that scopes the
//! session keys in browser storage.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [session]
//! namespace = ""      # empty = unscoped keys
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration. The web crate lets the compile-time
//! environment variable `GRIDSOCIAL_API_URL` override `api.base_url`.

use serde::Deserialize;

/// Top-level configuration stored in `gridsocial.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin all endpoints are relative to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session storage settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Prefix for the session keys. Empty string means unscoped keys.
    #[serde(default)]
    pub namespace: String,
}

impl SessionConfig {
    /// The namespace as an option, `None` when unscoped.
    pub fn namespace(&self) -> Option<&str> {
        let ns = self.namespace.trim();
        (!ns.is_empty()).then_some(ns)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gridsocial.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Apply an override for the API origin, ignoring blank values.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }
}
