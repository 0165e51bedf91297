//! Generator configuration overrides.
//!
//! Callers may override the resolved namespaces via a TOML config file that
//! sits alongside the service definition. Every field has a total default
//! derivation, so an absent file or absent field is never an error.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional name overrides applied during generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Controller namespace; defaults to `<api namespace>.Controllers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: Option<String>,
    /// API namespace; defaults to the service's declared namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_namespace_name: Option<String>,
}

impl GeneratorConfig {
    /// Load overrides from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read generator config: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse generator config: {:?}", path))
    }
}
