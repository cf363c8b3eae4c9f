//! Data transfer objects for relay HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{RunStatus, Thread, ThreadMessage};
use crate::ports::ToolOutput;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to post a user message to a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
}

/// One tool output in a submission body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutputRequest {
    /// ID of the tool call being answered
    pub tool_call_id: String,
    /// Output passed back to the assistant
    pub output: String,
}

impl From<ToolOutputRequest> for ToolOutput {
    fn from(req: ToolOutputRequest) -> Self {
        Self {
            tool_call_id: req.tool_call_id,
            output: req.output,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Status of a run. `required_action` and `last_error` are forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatusResponse {
    pub run_id: String,
    pub thread_id: String,
    pub status: String,
    pub required_action: Option<serde_json::Value>,
    pub last_error: Option<serde_json::Value>,
}

impl From<RunStatus> for RunStatusResponse {
    fn from(status: RunStatus) -> Self {
        Self {
            run_id: status.run_id,
            thread_id: status.thread_id,
            status: status.status,
            required_action: status.required_action,
            last_error: status.last_error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessageResponse {
    pub content: String,
    pub role: String,
    pub hidden: bool,
    pub id: String,
    pub created_at: i64,
}

impl From<ThreadMessage> for ThreadMessageResponse {
    fn from(message: ThreadMessage) -> Self {
        Self {
            content: message.content,
            role: message.role,
            hidden: message.hidden,
            id: message.id,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub messages: Vec<ThreadMessageResponse>,
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            messages: thread.messages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
