//! # Plugin Toolkit
//!
//! Small helpers for plugins embedded in a game-server host runtime:
//! discovering which version-suffixed internal namespace the host publishes,
//! routing commands through a prioritized handler chain, and the supporting
//! glue around them (manifest lookup, environment settings, an empty-server
//! shutdown policy).
//!
//! ## Key Pieces
//!
//! - [`VersionProber`]: probes the host's namespace registry for the active
//!   version-suffixed namespace and memoizes the winner
//! - [`CommandChain`]: insertion-ordered handler chain with first-match and
//!   broadcast dispatch plus the matching completion lookups
//! - [`PluginManifest`]: key/value view over the plugin's manifest resource
//! - [`PluginEnvironment`]: immutable development/verbosity settings
//! - [`ShutdownOnLastQuit`]: stops the server when the last player leaves
//!
//! The host side stays abstract: the toolkit only asks for a
//! [`NamespaceRegistry`] to resolve symbols and a [`HostServer`] to count
//! players and trigger shutdown. How the host delivers events, manifests,
//! or player counts is its own business.
//!
//! ## Usage
//!
//! ```rust
//! use plugin_toolkit::{
//!     CommandChain, CommandHandler, CommandRequest, CommandSender, HandlerError,
//! };
//! use std::sync::Arc;
//!
//! struct Teleport;
//!
//! impl CommandHandler for Teleport {
//!     fn try_handle(&self, request: &CommandRequest) -> Result<bool, HandlerError> {
//!         Ok(request.command == "tp")
//!     }
//!
//!     fn try_complete(&self, _request: &CommandRequest) -> Result<Option<Vec<String>>, HandlerError> {
//!         Ok(Some(vec!["here".to_string(), "spawn".to_string()]))
//!     }
//! }
//!
//! # fn main() -> Result<(), HandlerError> {
//! let mut chain = CommandChain::new();
//! chain.register(Arc::new(Teleport));
//!
//! let request = CommandRequest::new(CommandSender::Console, "tp", "tp", vec![]);
//! assert!(chain.dispatch_first(&request)?);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod probe;
pub mod shutdown;
pub mod types;

// Re-exports for convenience
pub use commands::{CommandChain, CommandHandler};
pub use environment::{PluginEnvironment, PluginEnvironmentBuilder};
pub use error::{HandlerError, ManifestError, ProbeError};
pub use manifest::{PluginManifest, NO_VALUE_SET};
pub use probe::{HostVersion, NamespaceRegistry, ProbeCache, ProbeConfig, VersionProber};
pub use shutdown::{HostServer, ShutdownOnLastQuit};
pub use types::{CommandRequest, CommandSender, PlayerId};
