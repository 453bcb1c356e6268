//! Built-in environments for terrarium.
//!
//! Provides the two stock capability providers that implement the
//! `Environment` trait from terrarium-core:
//!
//! - **Wallet** ([`wallet`]): token balances over Solana JSON-RPC
//! - **Web browser** ([`web_browser`]): page extraction via a reader API
//!
//! Each environment owns its connection parameters exclusively and
//! immutably after construction and performs at most one outbound HTTP
//! call per command.

pub mod wallet;
pub mod web_browser;

use std::sync::Arc;

use terrarium_core::EnvironmentRegistry;
use terrarium_platform::HttpClient;
use terrarium_types::config::Config;

pub use wallet::WalletEnvironment;
pub use web_browser::WebBrowserEnvironment;

/// Register all built-in environments with the given registry.
///
/// Constructs one instance of every environment in this crate from `config`
/// and registers it. Fails only on registry misconfiguration (duplicate
/// names), which is fatal at startup.
pub fn register_all(
    registry: &mut EnvironmentRegistry,
    config: &Config,
    http: Arc<dyn HttpClient>,
) -> terrarium_types::Result<()> {
    registry.register(Arc::new(WalletEnvironment::new(
        config.wallet.clone(),
        Arc::clone(&http),
    )))?;
    registry.register(Arc::new(WebBrowserEnvironment::new(
        config.browser.clone(),
        http,
    )))?;
    Ok(())
}
