//! The uniform command response shape.
//!
//! Every environment command -- success or failure -- resolves to exactly one
//! [`CommandResult`]. Failures are results with an error-flavored title, never
//! errors propagated past the environment boundary, so callers can always
//! render something without a separate error channel.

use serde::{Deserialize, Serialize};

/// Result of handling one command.
///
/// `title` is always set, even on error, so a renderer can distinguish
/// success from failure without inspecting `content`. `content` is always a
/// non-empty description of the outcome, including failure text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// Short human-readable summary of the outcome.
    pub title: String,

    /// Primary text body.
    pub content: String,

    /// Suggested follow-up command strings. Advisory only -- these are hints
    /// for the agent loop and are never validated against the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_actions: Option<Vec<String>>,
}

impl CommandResult {
    /// Create a result with the given title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            available_actions: None,
        }
    }

    /// Attach suggested follow-up commands.
    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.available_actions = Some(actions);
        self
    }

    /// Create an error-flavored result with title `"Error"`.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new("Error", content)
    }
}

/// One documented command of an environment.
///
/// Descriptors are documentation only: the dispatcher never validates an
/// incoming action against this list, and an environment must reject unknown
/// actions itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Action token, e.g. `"tokens"` or `"open"`.
    pub name: String,

    /// Human-readable description shown in help output.
    pub description: String,
}

impl CommandSpec {
    /// Create a descriptor from name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_title_and_content() {
        let result = CommandResult::new("Wallet Help", "Available commands: ...");
        assert_eq!(result.title, "Wallet Help");
        assert_eq!(result.content, "Available commands: ...");
        assert!(result.available_actions.is_none());
    }

    #[test]
    fn error_uses_error_title() {
        let result = CommandResult::error("Unknown wallet action: frobnicate");
        assert_eq!(result.title, "Error");
        assert!(result.content.contains("frobnicate"));
    }

    #[test]
    fn with_actions_attaches_hints() {
        let result = CommandResult::new("t", "c")
            .with_actions(vec!["wallet tokens".into(), "web open https://example.com".into()]);
        let actions = result.available_actions.unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], "wallet tokens");
    }

    #[test]
    fn serializes_actions_in_camel_case() {
        let result = CommandResult::new("t", "c").with_actions(vec!["a".into()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["availableActions"][0], "a");
    }

    #[test]
    fn omits_actions_when_none() {
        let json = serde_json::to_value(CommandResult::new("t", "c")).unwrap();
        assert!(json.get("availableActions").is_none());
    }

    #[test]
    fn deserializes_without_actions() {
        let result: CommandResult =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        assert_eq!(result.title, "t");
        assert!(result.available_actions.is_none());
    }

    #[test]
    fn command_spec_roundtrip() {
        let spec = CommandSpec::new("tokens", "View all SPL tokens in the wallet");
        let json = serde_json::to_string(&spec).unwrap();
        let back: CommandSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
