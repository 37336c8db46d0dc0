//! Empty-server shutdown policy.
//!
//! Some deployments only keep the server process alive while players are
//! on it. [`ShutdownOnLastQuit`] wraps the host's player-quit lifecycle
//! event and asks the host to shut down once the last player leaves.

use crate::types::PlayerId;
use tracing::info;

/// Host-side operations needed to decide and execute an empty-server
/// shutdown. Implemented by the embedding server integration.
pub trait HostServer: Send + Sync {
    /// Number of players currently counted as online.
    fn online_player_count(&self) -> usize;

    /// Asks the host to begin shutting down.
    fn shutdown(&self);
}

/// Shuts the server down when the last player disconnects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShutdownOnLastQuit;

impl ShutdownOnLastQuit {
    /// Creates the policy object.
    pub fn new() -> Self {
        Self
    }

    /// Call from the host's player-quit hook.
    ///
    /// The departing player is still counted as online while the quit
    /// event is being delivered, so the trigger threshold is one rather
    /// than zero.
    pub fn on_player_quit(&self, server: &dyn HostServer, player: PlayerId) {
        if server.online_player_count() <= 1 {
            info!("🛑 Last player {} left - shutting down the server", player);
            server.shutdown();
        }
    }
}
