//! Wallet environment.
//!
//! Reports SPL token balances for a monitored wallet address via a Solana
//! JSON-RPC endpoint (`getTokenAccountsByOwner`). Zero-balance accounts are
//! dropped before counting or display, and the formatted listing is
//! deterministic: the same record set always renders byte-identically.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use terrarium_core::{CommandContext, Environment, split_command};
use terrarium_platform::{HttpClient, HttpError};
use terrarium_types::config::WalletConfig;
use terrarium_types::{CommandResult, CommandSpec};

/// SPL Token program id, owner filter for `getTokenAccountsByOwner`.
const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// The wallet environment's closed action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalletAction {
    Tokens,
    Help,
}

impl WalletAction {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "tokens" => Some(Self::Tokens),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Environment wrapping one Solana RPC endpoint for one wallet address.
pub struct WalletEnvironment {
    config: WalletConfig,
    http: Arc<dyn HttpClient>,
}

/// One token-account record after parsing and flattening.
#[derive(Debug, Clone, PartialEq)]
struct TokenBalance {
    mint: String,
    amount: f64,
}

// getTokenAccountsByOwner response, jsonParsed encoding. Only the fields
// the listing needs are declared; everything else is ignored.
#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<RpcResult>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    message: String,
}

#[derive(Deserialize)]
struct RpcResult {
    value: Vec<TokenAccount>,
}

#[derive(Deserialize)]
struct TokenAccount {
    account: Account,
}

#[derive(Deserialize)]
struct Account {
    data: AccountData,
}

#[derive(Deserialize)]
struct AccountData {
    parsed: ParsedData,
}

#[derive(Deserialize)]
struct ParsedData {
    info: TokenInfo,
}

#[derive(Deserialize)]
struct TokenInfo {
    mint: String,
    #[serde(rename = "tokenAmount")]
    token_amount: TokenAmount,
}

#[derive(Deserialize)]
struct TokenAmount {
    // null for some zero-balance accounts; treated as 0 and filtered out.
    #[serde(rename = "uiAmount")]
    ui_amount: Option<f64>,
}

impl WalletEnvironment {
    /// Create the wallet environment from its startup configuration.
    pub fn new(config: WalletConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Fetch, filter, and format the wallet's token balances.
    async fn tokens(&self) -> CommandResult {
        match self.fetch_token_balances().await {
            Ok(balances) => self.render_balances(&balances),
            Err(err) => {
                warn!(error = %err, "token balance fetch failed");
                CommandResult::error(format!("Failed to fetch token balances: {err}"))
            }
        }
    }

    /// Issue the `getTokenAccountsByOwner` call and flatten the records,
    /// dropping zero balances.
    async fn fetch_token_balances(&self) -> Result<Vec<TokenBalance>, HttpError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTokenAccountsByOwner",
            "params": [
                self.config.address,
                { "programId": SPL_TOKEN_PROGRAM_ID },
                { "encoding": "jsonParsed" },
            ],
        });

        debug!(rpc_url = %self.config.rpc_url, "requesting token accounts");

        let headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        let response = self
            .http
            .post(&self.config.rpc_url, &headers, request.to_string().as_bytes())
            .await?;

        if !response.is_success() {
            return Err(format!("RPC request failed with status {}", response.status).into());
        }

        let parsed: RpcResponse = response.json()?;
        if let Some(error) = parsed.error {
            return Err(error.message.into());
        }
        let result = parsed
            .result
            .ok_or("missing result in RPC response")?;

        let balances = result
            .value
            .into_iter()
            .map(|account| {
                let info = account.account.data.parsed.info;
                TokenBalance {
                    mint: info.mint,
                    amount: info.token_amount.ui_amount.unwrap_or(0.0),
                }
            })
            .filter(|balance| balance.amount > 0.0)
            .collect();

        Ok(balances)
    }

    fn render_balances(&self, balances: &[TokenBalance]) -> CommandResult {
        if balances.is_empty() {
            return CommandResult::new(
                "Wallet Token Balance",
                "No SPL tokens found in this wallet.",
            );
        }

        let listing = balances
            .iter()
            .map(|balance| format!("Token: {}\nBalance: {}\n---", balance.mint, balance.amount))
            .collect::<Vec<_>>()
            .join("\n");

        CommandResult::new(
            "Wallet Token Balance",
            format!(
                "Found {} tokens in wallet {}:\n\n{}",
                balances.len(),
                self.config.address,
                listing
            ),
        )
        .with_actions(vec![
            "Use 'web open https://pump.fun/{token_address}' to check token details".into(),
            "Use 'twitter post' to share insights about tokens".into(),
        ])
    }

    fn help(&self) -> CommandResult {
        CommandResult::new(
            "Wallet Help",
            "Available commands:\n\
             tokens - View all SPL-20 tokens in the wallet\n\
             help - Show this help message\n\
             \n\
             Example usage:\n\
             wallet tokens\n",
        )
    }
}

#[async_trait]
impl Environment for WalletEnvironment {
    fn name(&self) -> &str {
        "wallet"
    }

    fn commands(&self) -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("tokens", "View all SPL-20 tokens in the wallet"),
            CommandSpec::new("help", "Show wallet commands help"),
        ]
    }

    async fn handle_command(&self, raw: &str, _ctx: &CommandContext) -> CommandResult {
        let (action, _params) = split_command(raw);
        match WalletAction::from_token(&action) {
            Some(WalletAction::Tokens) => self.tokens().await,
            Some(WalletAction::Help) => self.help(),
            None => CommandResult::error(format!("Unknown wallet action: {action}")),
        }
    }
}
