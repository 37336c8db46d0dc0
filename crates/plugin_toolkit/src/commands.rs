//! Prioritized command dispatch.
//!
//! A [`CommandChain`] owns an ordered list of handlers; registration order
//! is the priority order. Four policies route a single request through the
//! list: claim by the first willing handler, broadcast to all, first
//! contributed completion set, and every contributed completion set
//! concatenated.

use crate::error::HandlerError;
use crate::types::CommandRequest;
use std::sync::Arc;
use tracing::debug;

/// A unit able to attempt handling a command and to suggest completions
/// for it.
///
/// These two methods are the only operations the chain ever invokes on a
/// handler.
pub trait CommandHandler: Send + Sync {
    /// Attempts to process `request`, returning whether this handler
    /// claimed it.
    ///
    /// # Errors
    ///
    /// Any handler-defined failure; the chain aborts the dispatch and
    /// forwards it unchanged.
    fn try_handle(&self, request: &CommandRequest) -> Result<bool, HandlerError>;

    /// Offers completion suggestions for `request`, or `None` when this
    /// handler has nothing to contribute.
    ///
    /// # Errors
    ///
    /// Any handler-defined failure; the chain aborts the lookup and
    /// forwards it unchanged.
    fn try_complete(&self, request: &CommandRequest) -> Result<Option<Vec<String>>, HandlerError>;
}

/// An insertion-ordered chain of command handlers.
///
/// Registration order is the sole priority signal and is preserved exactly
/// for the lifetime of the chain; nothing here removes or reorders
/// handlers. None of the dispatch operations mutate the sequence.
#[derive(Default)]
pub struct CommandChain {
    handlers: Vec<Arc<dyn CommandHandler>>,
}

impl CommandChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends `handler` at the lowest-priority position.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        self.handlers.push(handler);
        debug!("Registered command handler #{}", self.handlers.len());
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether the chain has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes handlers in priority order and stops at the first one that
    /// claims the request.
    ///
    /// Handlers after the claiming one are never consulted, so exactly one
    /// handler ever owns a request. Returns `false` when no handler
    /// claimed it.
    pub fn dispatch_first(&self, request: &CommandRequest) -> Result<bool, HandlerError> {
        for handler in &self.handlers {
            if handler.try_handle(request)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Invokes every handler regardless of outcome.
    ///
    /// Returns `true` when at least one handler claimed the request. Use
    /// this when several independent side effects must all run for one
    /// request.
    pub fn dispatch_all(&self, request: &CommandRequest) -> Result<bool, HandlerError> {
        let mut handled = false;

        for handler in &self.handlers {
            handled |= handler.try_handle(request)?;
        }

        Ok(handled)
    }

    /// Collects completions in priority order, stopping as soon as
    /// anything has been collected.
    ///
    /// The first handler that contributes suggestions wins; handlers after
    /// it are never consulted. Returns an empty list, never absence, when
    /// no handler contributes.
    pub fn complete_first(&self, request: &CommandRequest) -> Result<Vec<String>, HandlerError> {
        let mut results = Vec::new();

        for handler in &self.handlers {
            if let Some(mut suggestions) = handler.try_complete(request)? {
                results.append(&mut suggestions);
            }

            if !results.is_empty() {
                break;
            }
        }

        Ok(results)
    }

    /// Collects completions from every handler, concatenated in priority
    /// order, with no early stop.
    pub fn complete_all(&self, request: &CommandRequest) -> Result<Vec<String>, HandlerError> {
        let mut results = Vec::new();

        for handler in &self.handlers {
            if let Some(mut suggestions) = handler.try_complete(request)? {
                results.append(&mut suggestions);
            }
        }

        Ok(results)
    }
}
