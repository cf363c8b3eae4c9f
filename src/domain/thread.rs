//! Thread projections returned to the front end.
//!
//! These are shaped fresh from provider objects on every request and never
//! stored.

use crate::ports::{Message, MessageContent, Run};

/// Metadata key that marks a message's purpose.
pub const METADATA_TYPE_KEY: &str = "type";

/// Metadata value for messages the front end should not display.
pub const HIDDEN_MESSAGE_TYPE: &str = "hidden";

/// Instruction posted (hidden) at the start of every conversation.
pub const GREETING_PROMPT: &str =
    "Greet the user and tell it about yourself and ask it what it is looking for.";

/// Observed state of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatus {
    pub run_id: String,
    pub thread_id: String,
    pub status: String,
    pub required_action: Option<serde_json::Value>,
    pub last_error: Option<serde_json::Value>,
}

impl RunStatus {
    /// Projects a run, reporting it under the thread the caller addressed.
    pub fn from_run(run: Run, thread_id: impl Into<String>) -> Self {
        Self {
            run_id: run.id,
            thread_id: thread_id.into(),
            status: run.status,
            required_action: run.required_action,
            last_error: run.last_error,
        }
    }
}

/// A message as the front end sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    pub content: String,
    pub role: String,
    pub hidden: bool,
    pub id: String,
    pub created_at: i64,
}

impl From<Message> for ThreadMessage {
    fn from(message: Message) -> Self {
        let hidden = is_hidden(&message);
        let content = first_text(&message.content).to_string();
        Self {
            content,
            role: message.role,
            hidden,
            id: message.id,
            created_at: message.created_at,
        }
    }
}

/// All messages of a thread, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thread {
    pub messages: Vec<ThreadMessage>,
}

impl FromIterator<Message> for Thread {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().map(ThreadMessage::from).collect(),
        }
    }
}

/// Text of the first content block; empty when there is none or it is not text.
fn first_text(content: &[MessageContent]) -> &str {
    match content.first() {
        Some(MessageContent::Text { text }) => &text.value,
        _ => "",
    }
}

fn is_hidden(message: &Message) -> bool {
    message.metadata_str(METADATA_TYPE_KEY) == Some(HIDDEN_MESSAGE_TYPE)
}
