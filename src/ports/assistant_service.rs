//! Assistant Service Port - Interface for the hosted assistant API.
//!
//! The relay is a pure consumer of a thread/message/run API. This port names
//! the six calls it makes and the subset of each provider object it reads.
//!
//! # Design
//!
//! - Provider objects are deserialized leniently: unknown fields are ignored,
//!   unknown content block types are accepted.
//! - `required_action` and `last_error` stay untyped JSON; the relay forwards
//!   them without looking inside.
//! - Run `status` is a plain string for the same reason.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Port for the hosted assistant service.
///
/// Implementations translate these calls to the provider's HTTP API.
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Create an empty thread.
    async fn create_thread(&self) -> Result<Thread, AssistantError>;

    /// Append a message to a thread.
    async fn create_message(
        &self,
        thread_id: &str,
        message: NewMessage,
    ) -> Result<Message, AssistantError>;

    /// List the messages of a thread (first page only).
    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, AssistantError>;

    /// Start a run of an assistant on a thread.
    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, AssistantError>;

    /// Fetch the current state of a run.
    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, AssistantError>;

    /// Submit tool outputs to a run that is waiting for them.
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        tool_outputs: Vec<ToolOutput>,
    ) -> Result<Run, AssistantError>;
}

/// A conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A message stored on a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub created_at: i64,
    /// Content blocks in provider order.
    #[serde(default)]
    pub content: Vec<MessageContent>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Message {
    /// Returns a metadata value as a string, if present and a string.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
    }
}

/// One content block of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// Text block.
    Text { text: MessageText },
    /// Any block type the relay does not read (images, refusals, ...).
    #[serde(other)]
    Other,
}

/// Text payload of a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageText {
    pub value: String,
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

/// One page of thread messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    pub data: Vec<Message>,
    #[serde(default)]
    pub has_more: bool,
}

/// A run of an assistant on a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub thread_id: String,
    #[serde(default)]
    pub assistant_id: String,
    /// Lifecycle status as reported by the provider.
    pub status: String,
    #[serde(default)]
    pub required_action: Option<serde_json::Value>,
    #[serde(default)]
    pub last_error: Option<serde_json::Value>,
}

/// A message to append to a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl NewMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            metadata: None,
        }
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Output of one tool call, supplied by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

/// Assistant service errors.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Thread, run, or assistant does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limited by provider.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned a server error.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl AssistantError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
