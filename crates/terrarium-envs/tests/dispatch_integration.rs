//! End-to-end dispatch tests over mocked transports.
//!
//! Builds the full registry the way the CLI does -- `register_all` with a
//! config -- and routes raw command strings through it, with the upstream
//! RPC and reader APIs replaced by canned responses.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use terrarium_core::{CommandContext, EnvironmentRegistry, StateStore};
use terrarium_envs::register_all;
use terrarium_platform::{HttpClient, HttpError, HttpResponse};
use terrarium_types::SecretString;
use terrarium_types::config::Config;

const RPC_URL: &str = "https://rpc.example.com";
const READER_URL: &str = "https://reader.example.com/";

/// Routes requests to canned per-endpoint responses: JSON-RPC posts get the
/// token-account fixture, reader gets the page fixture.
struct FakeUpstreams {
    rpc_body: String,
    reader_body: String,
}

impl FakeUpstreams {
    fn new() -> Self {
        let rpc_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "value": [
                    {
                        "account": { "data": { "parsed": { "info": {
                            "mint": "ZeroMint11111111111111111111111111111111111",
                            "tokenAmount": { "uiAmount": 0, "decimals": 6 }
                        }}}}
                    },
                    {
                        "account": { "data": { "parsed": { "info": {
                            "mint": "ABC",
                            "tokenAmount": { "uiAmount": 5, "decimals": 6 }
                        }}}}
                    }
                ]
            }
        })
        .to_string();

        let reader_body = json!({
            "code": 200,
            "data": {
                "title": "Example Domain",
                "description": "An example page",
                "url": "https://www.example.com/",
                "content": "This domain is for use in illustrative examples."
            }
        })
        .to_string();

        Self {
            rpc_body,
            reader_body,
        }
    }
}

#[async_trait]
impl HttpClient for FakeUpstreams {
    async fn request(
        &self,
        _method: &str,
        url: &str,
        _headers: &HashMap<String, String>,
        _body: Option<&[u8]>,
    ) -> Result<HttpResponse, HttpError> {
        let body = if url == RPC_URL {
            self.rpc_body.clone()
        } else if url.starts_with(READER_URL) {
            self.reader_body.clone()
        } else {
            return Err(format!("unexpected url: {url}").into());
        };
        Ok(HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: body.into_bytes(),
        })
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.wallet.address = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin".into();
    config.wallet.rpc_url = RPC_URL.into();
    config.browser.api_url = READER_URL.into();
    config.browser.api_key = SecretString::new("test_key");
    config
}

fn build_registry() -> EnvironmentRegistry {
    let mut registry = EnvironmentRegistry::new();
    register_all(&mut registry, &test_config(), Arc::new(FakeUpstreams::new())).unwrap();
    registry
}

#[test]
fn register_all_registers_both_environments() {
    let registry = build_registry();
    assert_eq!(registry.list(), vec!["wallet", "web"]);
}

#[test]
fn register_all_twice_is_a_duplicate_error() {
    let mut registry = build_registry();
    let err = register_all(&mut registry, &test_config(), Arc::new(FakeUpstreams::new()))
        .unwrap_err();
    assert!(err.to_string().contains("duplicate environment"));
}

#[tokio::test]
async fn wallet_tokens_end_to_end() {
    let registry = build_registry();
    let ctx = CommandContext::default();

    let result = registry.route("wallet tokens", &ctx).await;
    assert_eq!(result.title, "Wallet Token Balance");
    assert!(result.content.contains("Found 1 tokens"));
    assert!(result.content.contains("ABC"));
    assert!(!result.content.contains("ZeroMint"));
    assert!(result.available_actions.is_some());
}

#[tokio::test]
async fn wallet_help_routes_to_environment_help_verbatim() {
    let registry = build_registry();
    let ctx = CommandContext::default();

    let routed = registry.route("wallet help", &ctx).await;
    let direct = registry
        .get("wallet")
        .unwrap()
        .handle_command("help", &ctx)
        .await;
    assert_eq!(routed, direct);
    assert_eq!(routed.title, "Wallet Help");
}

#[tokio::test]
async fn web_open_end_to_end() {
    let registry = build_registry();
    let ctx = CommandContext::default();

    let result = registry.route("web open https://www.example.com", &ctx).await;
    assert!(result.title.starts_with("PAGE TITLE: Example Domain"));
    assert!(result.content.contains("illustrative examples"));
}

#[tokio::test]
async fn unknown_environment_is_an_error_result() {
    let registry = build_registry();
    let ctx = CommandContext::default();

    let result = registry.route("unknownenv foo", &ctx).await;
    assert_eq!(result.title, "Error");
    assert!(result.content.contains("unknownenv"));
}

#[tokio::test]
async fn unknown_actions_never_escape_the_environments() {
    let registry = build_registry();
    let ctx = CommandContext::default();

    for raw in ["wallet frobnicate now", "web frobnicate now", "wallet", "web"] {
        let result = registry.route(raw, &ctx).await;
        assert_eq!(result.title, "Error", "input {raw:?}");
        assert!(!result.content.is_empty());
    }
}

#[tokio::test]
async fn state_store_is_shared_across_route_calls() {
    let registry = build_registry();
    let state = Arc::new(StateStore::new(
        [("first_message".to_string(), json!(true))].into_iter().collect(),
    ));
    let ctx = CommandContext::new(Arc::clone(&state));

    registry.route("wallet help", &ctx).await;
    state.update([("first_message".to_string(), json!(false))].into_iter().collect());
    registry.route("web help", &ctx).await;

    let snapshot = state.get();
    assert_eq!(snapshot["first_message"], false);
}

#[tokio::test]
async fn outbound_failure_is_reported_in_band() {
    struct AlwaysDown;

    #[async_trait]
    impl HttpClient for AlwaysDown {
        async fn request(
            &self,
            _method: &str,
            _url: &str,
            _headers: &HashMap<String, String>,
            _body: Option<&[u8]>,
        ) -> Result<HttpResponse, HttpError> {
            Err("network unreachable".into())
        }
    }

    let mut registry = EnvironmentRegistry::new();
    register_all(&mut registry, &test_config(), Arc::new(AlwaysDown)).unwrap();
    let ctx = CommandContext::default();

    let wallet = registry.route("wallet tokens", &ctx).await;
    assert_eq!(wallet.title, "Error");
    assert!(wallet.content.contains("network unreachable"));

    let web = registry.route("web open https://www.example.com", &ctx).await;
    assert_eq!(web.title, "Error Opening Link");
    assert!(web.content.contains("network unreachable"));
}
