//! Environment registry and command dispatch.
//!
//! [`EnvironmentRegistry`] holds the fixed set of environments and resolves
//! incoming `"<environment> <action> <args...>"` strings to the right
//! provider. Routing never fails out-of-band: every call path through
//! [`route`](EnvironmentRegistry::route) terminates in exactly one
//! [`CommandResult`], with routing problems reported as error-titled
//! results. Only registration can fail, and only at startup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use terrarium_types::{CommandResult, TerrariumError};

use crate::environment::{CommandContext, Environment, split_command};

/// Registry of environments, indexed by lower-cased name.
///
/// The environment set is fixed after startup: environments are registered
/// once during bootstrap and never replaced or removed. The registry holds
/// no per-call state; each `route` invocation is independent.
#[derive(Default)]
pub struct EnvironmentRegistry {
    environments: HashMap<String, Arc<dyn Environment>>,
}

impl EnvironmentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            environments: HashMap::new(),
        }
    }

    /// Register an environment.
    ///
    /// The name must be a single whitespace-free token (it doubles as the
    /// routing prefix). Registering a second environment under the same
    /// name -- compared case-insensitively -- is a configuration error and
    /// fatal at startup.
    pub fn register(&mut self, environment: Arc<dyn Environment>) -> Result<(), TerrariumError> {
        let name = environment.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(TerrariumError::InvalidEnvironmentName { name: name.into() });
        }

        let key = name.to_lowercase();
        if self.environments.contains_key(&key) {
            return Err(TerrariumError::DuplicateEnvironment { name: name.into() });
        }

        debug!(environment = %key, "registering environment");
        self.environments.insert(key, environment);
        Ok(())
    }

    /// Look up an environment by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<dyn Environment>> {
        self.environments.get(&name.to_lowercase()).cloned()
    }

    /// List all registered environment names (sorted alphabetically).
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.environments.keys().cloned().collect();
        names.sort();
        names
    }

    /// Return the number of registered environments.
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    /// Return true if no environments are registered.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Render a formatted listing of every environment's documented
    /// commands, for help output and agent prompts.
    ///
    /// Environments are sorted by name for deterministic output.
    pub fn overview(&self) -> String {
        let mut sections = Vec::with_capacity(self.environments.len());
        for name in self.list() {
            let environment = &self.environments[&name];
            let mut lines = vec![format!("{name}:")];
            for spec in environment.commands() {
                lines.push(format!("  {} - {}", spec.name, spec.description));
            }
            sections.push(lines.join("\n"));
        }
        sections.join("\n\n")
    }

    /// Route a raw command string to the environment named by its first
    /// token and return that environment's result.
    ///
    /// The leading environment selector is stripped before the environment
    /// sees the command, so handlers receive only `"<action> <args...>"`.
    /// Never panics and never returns an error: an empty command or an
    /// unknown environment produces a `CommandResult` with title `"Error"`
    /// naming the problem.
    pub async fn route(&self, raw: &str, ctx: &CommandContext) -> CommandResult {
        let (target, rest) = split_command(raw);
        if target.is_empty() {
            return CommandResult::error("Empty command. Expected '<environment> <action>'.");
        }

        match self.environments.get(&target) {
            Some(environment) => {
                debug!(environment = %target, command = %rest, "dispatching command");
                environment.handle_command(rest, ctx).await
            }
            None => CommandResult::error(format!("Unknown environment: {target}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use terrarium_types::CommandSpec;

    use super::*;

    /// A fixture environment that echoes whatever command it receives.
    struct EchoEnvironment {
        name: &'static str,
    }

    #[async_trait]
    impl Environment for EchoEnvironment {
        fn name(&self) -> &str {
            self.name
        }

        fn commands(&self) -> Vec<CommandSpec> {
            vec![
                CommandSpec::new("echo", "Echo back the command"),
                CommandSpec::new("help", "Show echo help"),
            ]
        }

        async fn handle_command(&self, raw: &str, _ctx: &CommandContext) -> CommandResult {
            CommandResult::new("Echo", format!("got: {raw}"))
        }
    }

    fn echo(name: &'static str) -> Arc<dyn Environment> {
        Arc::new(EchoEnvironment { name })
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = EnvironmentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn register_and_get() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let environment = registry.get("wallet").unwrap();
        assert_eq!(environment.name(), "wallet");
        // Lookup is case-insensitive.
        assert!(registry.get("WALLET").is_some());
        assert!(registry.get("web").is_none());
    }

    #[test]
    fn register_duplicate_fails() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let err = registry.register(echo("wallet")).unwrap_err();
        assert!(matches!(err, TerrariumError::DuplicateEnvironment { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_duplicate_differing_case_fails() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("Wallet")).unwrap();
        let err = registry.register(echo("wallet")).unwrap_err();
        assert!(matches!(err, TerrariumError::DuplicateEnvironment { .. }));
    }

    #[test]
    fn register_rejects_multi_word_names() {
        let mut registry = EnvironmentRegistry::new();
        let err = registry.register(echo("web browser")).unwrap_err();
        assert!(matches!(err, TerrariumError::InvalidEnvironmentName { .. }));

        let err = registry.register(echo("")).unwrap_err();
        assert!(matches!(err, TerrariumError::InvalidEnvironmentName { .. }));
    }

    #[test]
    fn list_returns_sorted_names() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("web")).unwrap();
        registry.register(echo("wallet")).unwrap();

        assert_eq!(registry.list(), vec!["wallet", "web"]);
    }

    #[test]
    fn overview_lists_commands_per_environment() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();
        registry.register(echo("web")).unwrap();

        let overview = registry.overview();
        assert!(overview.contains("wallet:"));
        assert!(overview.contains("web:"));
        assert!(overview.contains("  echo - Echo back the command"));
        // Sorted: wallet section first.
        assert!(overview.find("wallet:").unwrap() < overview.find("web:").unwrap());
    }

    #[tokio::test]
    async fn route_strips_environment_prefix() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let ctx = CommandContext::default();
        let result = registry.route("wallet tokens extra args", &ctx).await;
        assert_eq!(result.title, "Echo");
        assert_eq!(result.content, "got: tokens extra args");
    }

    #[tokio::test]
    async fn route_matches_case_insensitively() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let ctx = CommandContext::default();
        let result = registry.route("Wallet Help", &ctx).await;
        assert_eq!(result.content, "got: Help");
    }

    #[tokio::test]
    async fn route_unknown_environment_returns_error_result() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let ctx = CommandContext::default();
        let result = registry.route("unknownenv foo", &ctx).await;
        assert_eq!(result.title, "Error");
        assert!(result.content.contains("unknownenv"));
    }

    #[tokio::test]
    async fn route_empty_command_returns_error_result() {
        let registry = EnvironmentRegistry::new();
        let ctx = CommandContext::default();

        for raw in ["", "   "] {
            let result = registry.route(raw, &ctx).await;
            assert_eq!(result.title, "Error");
            assert!(!result.content.is_empty());
        }
    }

    #[tokio::test]
    async fn route_bare_environment_name_passes_empty_command() {
        let mut registry = EnvironmentRegistry::new();
        registry.register(echo("wallet")).unwrap();

        let ctx = CommandContext::default();
        let result = registry.route("wallet", &ctx).await;
        assert_eq!(result.content, "got: ");
    }
}
