//! Shared identifier and request types for command dispatch

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player connected to the host server.
///
/// A wrapper around UUID that provides type safety and ensures player ids
/// cannot be confused with other kinds of ids in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player id using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The origin of a command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSender {
    /// The server console
    Console,
    /// A connected player
    Player(PlayerId),
}

/// A single incoming command invocation.
///
/// The dispatch chain hands this bundle to every handler it consults
/// without reading or modifying any field; its contents only mean
/// something to the handlers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Who issued the command
    pub sender: CommandSender,
    /// The registered name of the command being invoked
    pub command: String,
    /// The alias the sender actually typed
    pub label: String,
    /// Arguments following the command, already tokenized by the host
    pub args: Vec<String>,
}

impl CommandRequest {
    /// Creates a new request.
    pub fn new(
        sender: CommandSender,
        command: impl Into<String>,
        label: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            sender,
            command: command.into(),
            label: label.into(),
            args,
        }
    }
}
