//! CLI command implementations for `terra`.
//!
//! Each subcommand is implemented in its own module:
//!
//! - [`route`] -- Dispatch a single command string.
//! - [`repl`] -- Interactive command loop.
//! - [`envs`] -- Registry overview.
//! - [`status`] -- Configuration diagnostics.

pub mod envs;
pub mod repl;
pub mod route;
pub mod status;

use std::sync::Arc;

use serde_json::{Map, Value, json};

use terrarium_core::{EnvironmentRegistry, StateStore};
use terrarium_envs::register_all;
use terrarium_platform::NativeHttpClient;
use terrarium_types::CommandResult;
use terrarium_types::config::Config;

/// Load and validate configuration, then build the environment registry and
/// the process-wide state store.
///
/// Any failure here is a startup-time configuration error: a missing
/// required parameter or a duplicate environment name. Once this returns,
/// no fatal path remains inside command handling.
pub fn bootstrap() -> anyhow::Result<(EnvironmentRegistry, Arc<StateStore>)> {
    let config = Config::load()?;
    config.validate()?;

    let mut registry = EnvironmentRegistry::new();
    register_all(&mut registry, &config, Arc::new(NativeHttpClient::new()))?;
    tracing::debug!(environments = registry.len(), "registry initialized");

    let state = Arc::new(StateStore::new(initial_state()));
    Ok((registry, state))
}

/// The fixed initial key set for the process state.
fn initial_state() -> Map<String, Value> {
    let mut state = Map::new();
    state.insert(
        "current_time".into(),
        json!(chrono::Utc::now().to_rfc3339()),
    );
    state.insert("motd".into(), json!("terrarium"));
    state.insert("first_message".into(), json!(true));
    state
}

/// Print a command result the way the agent loop would render it.
pub fn print_result(result: &CommandResult) {
    println!("{}", result.title);
    println!();
    println!("{}", result.content);
    if let Some(actions) = &result.available_actions {
        println!();
        println!("Suggested next steps:");
        for action in actions {
            println!("  - {action}");
        }
    }
}
