//! Error types for the plugin toolkit

use crate::probe::HostVersion;

/// Errors raised by the version prober
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Every candidate in the configured search space failed to resolve
    #[error(
        "host runtime exposes no supported namespace under '{base_path}': \
         searched {smallest} through {largest}. The host may be newer than \
         the versions this build supports."
    )]
    UnsupportedHostVersion {
        /// Namespace prefix the candidates were synthesized under
        base_path: String,
        /// Smallest candidate attempted
        smallest: HostVersion,
        /// Largest candidate attempted
        largest: HostVersion,
    },
}

/// Errors raised while loading a plugin manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest resource could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid TOML
    #[error("Manifest parsing failed: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An opaque failure produced by a command handler.
///
/// The dispatch chain forwards these unchanged: it never inspects, wraps,
/// or recovers from a handler's error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct HandlerError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl HandlerError {
    /// Wraps any handler-defined error (or a plain message).
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(source.into())
    }
}
