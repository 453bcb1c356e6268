//! `terra status` -- show resolved configuration and diagnostics.
//!
//! Loads configuration without requiring it to be complete, so a fresh
//! install can see what is still missing. Secrets are redacted.

use clap::Args;

use terrarium_types::config::{Config, discover_config_path};

/// Arguments for the `terra status` subcommand.
#[derive(Args)]
pub struct StatusArgs {}

/// Run the status command.
pub fn run(_args: StatusArgs) -> anyhow::Result<()> {
    println!("terra status");
    println!("============");
    println!();

    match discover_config_path() {
        Some(path) => println!("Config: {}", path.display()),
        None => {
            println!("Config: not found");
            println!("  Searched: ~/.terrarium/config.json");
            println!("  Set TERRARIUM_CONFIG env var to override");
        }
    }

    let config = Config::load()?;

    println!();
    println!("Wallet environment:");
    println!(
        "  Address: {}",
        if config.wallet.address.is_empty() {
            "(not set)"
        } else {
            config.wallet.address.as_str()
        }
    );
    println!("  RPC URL: {}", config.wallet.rpc_url);

    println!();
    println!("Web browser environment:");
    println!("  API URL: {}", config.browser.api_url);
    println!(
        "  API key: {}",
        if config.browser.api_key.is_empty() {
            "(not set)".to_string()
        } else {
            config.browser.api_key.to_string()
        }
    );

    println!();
    match config.validate() {
        Ok(()) => println!("Configuration is complete."),
        Err(err) => println!("Configuration is incomplete: {err}"),
    }

    Ok(())
}
