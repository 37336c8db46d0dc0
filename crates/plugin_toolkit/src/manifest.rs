//! Plugin manifest access.
//!
//! Hosts ship each plugin with a small TOML manifest describing it. This
//! module reads that resource once into a flat key/value lookup so the
//! rest of the plugin can ask for its own metadata without re-parsing.

use crate::error::ManifestError;
use std::collections::HashMap;
use std::path::Path;

/// Returned by the typed getters when the manifest holds no value for the
/// key.
pub const NO_VALUE_SET: &str = "No value set";

/// Key/value view over a plugin's manifest resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginManifest {
    values: HashMap<String, String>,
}

impl PluginManifest {
    /// Parses a manifest from TOML text.
    ///
    /// Top-level string values are kept verbatim; other scalar values are
    /// rendered to their textual form. Nested tables and arrays are not
    /// part of the manifest's flat key space and are skipped.
    pub fn from_toml_str(text: &str) -> Result<Self, ManifestError> {
        let table: toml::Table = text.parse()?;

        let mut values = HashMap::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    values.insert(key, s);
                }
                toml::Value::Integer(_)
                | toml::Value::Float(_)
                | toml::Value::Boolean(_)
                | toml::Value::Datetime(_) => {
                    values.insert(key, value.to_string());
                }
                toml::Value::Array(_) | toml::Value::Table(_) => {}
            }
        }

        Ok(Self { values })
    }

    /// Reads and parses a manifest file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Looks up a raw manifest value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_or_default(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NO_VALUE_SET)
    }

    /// The plugin's name.
    pub fn name(&self) -> &str {
        self.get_or_default("name")
    }

    /// The plugin's own version.
    pub fn version(&self) -> &str {
        self.get_or_default("version")
    }

    /// The host API version the plugin targets.
    pub fn api_version(&self) -> &str {
        self.get_or_default("api-version")
    }

    /// The plugin's author.
    pub fn author(&self) -> &str {
        self.get_or_default("author")
    }

    /// Human-readable description of the plugin.
    pub fn description(&self) -> &str {
        self.get_or_default("description")
    }

    /// The entry point the host should instantiate.
    pub fn main_class(&self) -> &str {
        self.get_or_default("main")
    }

    /// The log prefix the host displays for the plugin.
    pub fn prefix(&self) -> &str {
        self.get_or_default("prefix")
    }
}
