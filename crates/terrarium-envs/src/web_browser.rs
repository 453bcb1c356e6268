//! Web browser environment.
//!
//! Opens a URL through a content-extraction (reader) API and returns the
//! page title, source URL, and extracted text. The reader endpoint is
//! prefix-style: the page URL is appended to the API base URL.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use terrarium_core::{CommandContext, Environment, split_command};
use terrarium_platform::{HttpClient, HttpError};
use terrarium_types::config::BrowserConfig;
use terrarium_types::{CommandResult, CommandSpec};

/// The web browser environment's closed action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowserAction {
    Open,
    Help,
}

impl BrowserAction {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "open" => Some(Self::Open),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Environment wrapping one reader-API endpoint.
pub struct WebBrowserEnvironment {
    config: BrowserConfig,
    http: Arc<dyn HttpClient>,
}

// Reader API response envelope: `{ code, data: { title, description, url,
// content } }`. Fields the page may omit are optional; empty strings are
// treated the same as missing.
#[derive(Deserialize)]
struct ReaderEnvelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    data: Option<ReaderPage>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ReaderPage {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Drop `None` and empty-string values in one step.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Strip one pair of surrounding quotes, if present.
fn clean_url(url: &str) -> &str {
    let trimmed = url.trim();
    let trimmed = trimmed
        .strip_prefix('"')
        .or_else(|| trimmed.strip_prefix('\''))
        .unwrap_or(trimmed);
    trimmed
        .strip_suffix('"')
        .or_else(|| trimmed.strip_suffix('\''))
        .unwrap_or(trimmed)
}

impl WebBrowserEnvironment {
    /// Create the web browser environment from its startup configuration.
    pub fn new(config: BrowserConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Open a URL and return the extracted page.
    async fn open_link(&self, url: &str) -> CommandResult {
        match self.fetch_page(url).await {
            Ok(result) => result,
            Err(err) => {
                warn!(url, error = %err, "page open failed");
                CommandResult::new("Error Opening Link", err.to_string())
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<CommandResult, HttpError> {
        let clean = clean_url(url);
        if !clean.starts_with("http") {
            return Err("URL must start with http:// or https://".into());
        }

        debug!(url = %clean, "opening page via reader API");

        let headers = HashMap::from([
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key.expose()),
            ),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        let response = self
            .http
            .get(&format!("{}{}", self.config.api_url, clean), &headers)
            .await?;

        // Prefer the upstream-reported message on HTTP-level failures, for
        // diagnosability; fall back to the bare status code.
        if !response.is_success() {
            let upstream = response
                .json::<ReaderEnvelope>()
                .ok()
                .and_then(|envelope| non_empty(envelope.message));
            return Err(upstream
                .unwrap_or_else(|| format!("reader API returned status {}", response.status))
                .into());
        }

        let envelope: ReaderEnvelope = response
            .json()
            .map_err(|_| "Invalid response format from reader API")?;

        let page = match (envelope.code, envelope.data) {
            (Some(200), Some(page)) => page,
            _ => return Err("Invalid response format from reader API".into()),
        };

        let mut title = format!(
            "PAGE TITLE: {}\nSOURCE URL: {}",
            non_empty(page.title).as_deref().unwrap_or("No title available"),
            non_empty(page.url).as_deref().unwrap_or(clean),
        );
        if let Some(description) = non_empty(page.description) {
            title.push_str(&format!("\nDESCRIPTION: {description}"));
        }

        let content = format!(
            "PAGE CONTENT:\n\n{}\n\n---\n\n\
             To navigate to another page, use the 'web open' command with the full URL. \
             You can also use 'twitter post' to share interesting findings on Twitter.",
            non_empty(page.content)
                .as_deref()
                .unwrap_or("No content available"),
        );

        Ok(CommandResult::new(title, content))
    }

    fn help(&self) -> CommandResult {
        CommandResult::new(
            "Web Browser Help",
            "Available commands:\n\
             open <url> - Open a URL and see the contents of a page. The URL must start with http:// or https://.\n\
             help - Show this help message\n\
             \n\
             Example usage:\n\
             web open https://pump.fun/51BqGGALnzxfNdrMgDVhR7hopNdZJ4A9ncep7AyYpump\n\
             web open https://www.example.com",
        )
    }
}

#[async_trait]
impl Environment for WebBrowserEnvironment {
    fn name(&self) -> &str {
        "web"
    }

    fn commands(&self) -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("open", "Open a URL and see the contents of a page."),
            CommandSpec::new("help", "Show Web Browser help"),
        ]
    }

    async fn handle_command(&self, raw: &str, _ctx: &CommandContext) -> CommandResult {
        let (action, params) = split_command(raw);
        match BrowserAction::from_token(&action) {
            Some(BrowserAction::Open) => self.open_link(params).await,
            Some(BrowserAction::Help) => self.help(),
            None => CommandResult::error(format!("Unknown action: {action}")),
        }
    }
}
