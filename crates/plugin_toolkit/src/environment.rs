//! Plugin environment settings.
//!
//! Distinguishes a development deployment from a production one, and
//! whether the plugin should log verbosely. The value is immutable once
//! built; embedders construct it during startup and hand it to whatever
//! needs it.

use serde::{Deserialize, Serialize};

/// Immutable development/verbosity settings for the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEnvironment {
    development: bool,
    verbose: bool,
}

impl PluginEnvironment {
    /// Starts building an environment. The defaults are a development,
    /// non-verbose setup.
    pub fn builder() -> PluginEnvironmentBuilder {
        PluginEnvironmentBuilder::default()
    }

    /// Whether the plugin is running in development rather than
    /// production/release.
    pub fn is_development(&self) -> bool {
        self.development
    }

    /// Whether the plugin logs everything it does.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder for [`PluginEnvironment`].
#[derive(Debug, Clone)]
pub struct PluginEnvironmentBuilder {
    development: bool,
    verbose: bool,
}

impl Default for PluginEnvironmentBuilder {
    fn default() -> Self {
        Self {
            development: true,
            verbose: false,
        }
    }
}

impl PluginEnvironmentBuilder {
    /// Sets whether this is a development deployment.
    pub fn development(mut self, value: bool) -> Self {
        self.development = value;
        self
    }

    /// Sets whether the plugin logs verbosely.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Finishes the build.
    pub fn build(self) -> PluginEnvironment {
        PluginEnvironment {
            development: self.development,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_development_without_verbosity() {
        let environment = PluginEnvironment::builder().build();

        assert!(environment.is_development());
        assert!(!environment.is_verbose());
    }

    #[test]
    fn builder_overrides_stick() {
        let environment = PluginEnvironment::builder()
            .development(false)
            .verbose(true)
            .build();

        assert!(!environment.is_development());
        assert!(environment.is_verbose());
    }
}
