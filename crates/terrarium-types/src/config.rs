//! Configuration schema and loading.
//!
//! Configuration is resolved once at process start:
//!
//! 1. `TERRARIUM_CONFIG` environment variable (explicit file path).
//! 2. `~/.terrarium/config.json`
//! 3. If neither exists, built-in defaults.
//!
//! Individual fields can then be overridden by environment variables
//! (`WALLET_ADDRESS`, `SOLANA_RPC_URL`, `JINA_API_KEY`). A missing required
//! parameter is a startup-time configuration error
//! ([`TerrariumError::ConfigInvalid`]), never a per-call error: environments
//! own their connection parameters exclusively and immutably after
//! construction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrariumError};
use crate::secret::SecretString;

fn default_rpc_url() -> String {
    "https://api.mainnet-beta.solana.com".to_string()
}

fn default_reader_api_url() -> String {
    "https://r.jina.ai/".to_string()
}

/// Root configuration for the terrarium framework.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Wallet environment settings.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Web browser environment settings.
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Settings for the wallet environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// The wallet address to monitor. Required.
    #[serde(default)]
    pub address: String,

    /// Solana JSON-RPC endpoint URL.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            rpc_url: default_rpc_url(),
        }
    }
}

/// Settings for the web browser environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Content-extraction (reader) API base URL. The page URL is appended.
    #[serde(default = "default_reader_api_url")]
    pub api_url: String,

    /// Reader API key. Required.
    #[serde(default)]
    pub api_key: SecretString,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_url: default_reader_api_url(),
            api_key: SecretString::default(),
        }
    }
}

impl Config {
    /// Load configuration from the discovered file (if any) and apply
    /// environment-variable overrides.
    pub fn load() -> Result<Self> {
        let mut config = match discover_config_path() {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)?;
                serde_json::from_str(&contents)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply environment-variable overrides via the given lookup function.
    ///
    /// Split out from [`load`](Config::load) so tests can inject variables
    /// without mutating the process environment.
    pub fn apply_env_overrides(&mut self, get_var: impl Fn(&str) -> Option<String>) {
        if let Some(address) = get_var("WALLET_ADDRESS") {
            self.wallet.address = address;
        }
        if let Some(rpc_url) = get_var("SOLANA_RPC_URL") {
            self.wallet.rpc_url = rpc_url;
        }
        if let Some(api_key) = get_var("JINA_API_KEY") {
            self.browser.api_key = SecretString::new(api_key);
        }
    }

    /// Validate that all required parameters are present.
    ///
    /// Called once at startup, before any environment is constructed.
    pub fn validate(&self) -> Result<()> {
        if self.wallet.address.is_empty() {
            return Err(TerrariumError::ConfigInvalid {
                reason: "wallet.address is required (set WALLET_ADDRESS)".into(),
            });
        }
        if self.browser.api_key.is_empty() {
            return Err(TerrariumError::ConfigInvalid {
                reason: "browser.api_key is required (set JINA_API_KEY)".into(),
            });
        }
        Ok(())
    }
}

/// Discover the config file path using the fallback chain.
///
/// Returns `None` if no config file exists at any candidate location.
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("TERRARIUM_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    if let Some(home) = dirs::home_dir() {
        let path = home.join(".terrarium").join("config.json");
        if path.exists() {
            return Some(path);
        }
    }

    None
}
