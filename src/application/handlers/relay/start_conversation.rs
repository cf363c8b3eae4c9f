//! StartConversationHandler - Command handler for opening a new conversation.

use std::sync::Arc;

use crate::domain::thread::{GREETING_PROMPT, HIDDEN_MESSAGE_TYPE, METADATA_TYPE_KEY};
use crate::domain::RunStatus;
use crate::ports::{AssistantError, AssistantService, NewMessage};

/// Handler for opening conversations.
///
/// Creates a thread, primes it with a hidden greeting instruction, and starts
/// the configured assistant on it. A failing step stops the sequence.
pub struct StartConversationHandler {
    service: Arc<dyn AssistantService>,
    assistant_id: String,
}

impl StartConversationHandler {
    pub fn new(service: Arc<dyn AssistantService>, assistant_id: impl Into<String>) -> Self {
        Self {
            service,
            assistant_id: assistant_id.into(),
        }
    }

    pub async fn handle(&self) -> Result<RunStatus, AssistantError> {
        // 1. Create thread
        let thread = self.service.create_thread().await?;

        // 2. Prime it with the hidden greeting instruction
        let priming =
            NewMessage::user(GREETING_PROMPT).with_metadata(METADATA_TYPE_KEY, HIDDEN_MESSAGE_TYPE);
        self.service.create_message(&thread.id, priming).await?;

        // 3. Start the assistant
        let run = self
            .service
            .create_run(&thread.id, &self.assistant_id)
            .await?;

        tracing::info!(thread_id = %thread.id, run_id = %run.id, "Conversation started");
        Ok(RunStatus::from_run(run, thread.id))
    }
}
