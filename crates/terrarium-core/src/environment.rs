//! The [`Environment`] trait and command-parsing contract.
//!
//! An environment wraps one external data source and exposes a fixed,
//! documented command set. The dispatcher strips the leading environment
//! selector before calling [`Environment::handle_command`], so an
//! environment only ever sees its own actions (`"tokens"`, `"open <url>"`,
//! `"help"`, ...).

use std::sync::Arc;

use async_trait::async_trait;

use terrarium_types::{CommandResult, CommandSpec};

use crate::state::StateStore;

/// Opaque caller context passed through to command handlers.
///
/// Carries recent conversation messages (whatever shape the host process
/// uses -- this core never inspects them) and a handle to the shared
/// [`StateStore`], the only mutable resource environments may touch.
#[derive(Clone)]
pub struct CommandContext {
    /// Recent conversation messages, newest last. Opaque to this core.
    pub messages: Vec<serde_json::Value>,

    /// Process-wide shared state.
    pub state: Arc<StateStore>,
}

impl CommandContext {
    /// Create a context over the given state store with no messages.
    pub fn new(state: Arc<StateStore>) -> Self {
        Self {
            messages: Vec::new(),
            state,
        }
    }

    /// Attach recent conversation messages.
    pub fn with_messages(mut self, messages: Vec<serde_json::Value>) -> Self {
        self.messages = messages;
        self
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(Arc::new(StateStore::default()))
    }
}

/// A capability provider wrapping one external data source.
///
/// Environments are constructed once at startup from configuration and live
/// for the process lifetime. Implementations must uphold one invariant:
/// every path through [`handle_command`](Environment::handle_command)
/// returns exactly one [`CommandResult`] -- unknown actions and upstream
/// failures are reported in-band with an error-flavored title, never as a
/// panic or an error the dispatcher would have to catch.
#[async_trait]
pub trait Environment: Send + Sync {
    /// The unique registry key for this environment. Must be a single
    /// whitespace-free token; matching is case-insensitive.
    fn name(&self) -> &str;

    /// The environment's documented command list.
    ///
    /// Documentation only: the dispatcher never validates incoming actions
    /// against this list, and an environment may accept actions it does not
    /// list here.
    fn commands(&self) -> Vec<CommandSpec>;

    /// Handle a command with the environment selector already stripped.
    ///
    /// `raw` is the action token plus any argument text, e.g.
    /// `"open https://example.com"`.
    async fn handle_command(&self, raw: &str, ctx: &CommandContext) -> CommandResult;
}

/// Split a raw command into its lower-cased first token and the remainder.
///
/// The remainder has leading whitespace trimmed and may be empty. An empty
/// input yields an empty action token, which environments map to their
/// unknown-action error.
pub fn split_command(raw: &str) -> (String, &str) {
    let trimmed = raw.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((action, rest)) => (action.to_lowercase(), rest.trim_start()),
        None => (trimmed.to_lowercase(), ""),
    }
}
