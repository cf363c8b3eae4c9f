//! PostMessageHandler - Command handler for a user turn.

use std::sync::Arc;

use crate::domain::RunStatus;
use crate::ports::{AssistantError, AssistantService, NewMessage};

/// Command to post a user message and start the assistant.
#[derive(Debug, Clone)]
pub struct PostMessageCommand {
    pub thread_id: String,
    pub content: String,
}

/// Handler for user turns.
///
/// Does not check whether the thread already has an active run.
pub struct PostMessageHandler {
    service: Arc<dyn AssistantService>,
    assistant_id: String,
}

impl PostMessageHandler {
    pub fn new(service: Arc<dyn AssistantService>, assistant_id: impl Into<String>) -> Self {
        Self {
            service,
            assistant_id: assistant_id.into(),
        }
    }

    pub async fn handle(&self, cmd: PostMessageCommand) -> Result<RunStatus, AssistantError> {
        self.service
            .create_message(&cmd.thread_id, NewMessage::user(cmd.content))
            .await?;

        let run = self
            .service
            .create_run(&cmd.thread_id, &self.assistant_id)
            .await?;

        tracing::info!(thread_id = %cmd.thread_id, run_id = %run.id, "Message posted");
        Ok(RunStatus::from_run(run, cmd.thread_id))
    }
}
