//! Read-only configuration for a Chorus deployment.
//!
//! # Design
//! The configuration document is JSON whose top-level keys are sections; the
//! client only reads the `alpine` section. Values are fixed once loaded —
//! nothing in the client mutates configuration at runtime.

use serde::Deserialize;

use crate::error::Error;

/// Connection settings for one Chorus/Alpine instance.
#[derive(Debug, Clone, Deserialize)]
pub struct AlpineConfig {
    /// Host (and optional port) the client connects to, without a scheme.
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Section-grouped client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub alpine: AlpineConfig,
}

impl Config {
    /// Load configuration from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, Error> {
        serde_json::from_str(document).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
