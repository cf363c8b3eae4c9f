//! GetThreadMessagesHandler - Query handler for reading a thread.

use std::sync::Arc;

use crate::domain::Thread;
use crate::ports::{AssistantError, AssistantService};

/// Query to list the messages of a thread.
#[derive(Debug, Clone)]
pub struct GetThreadMessagesQuery {
    pub thread_id: String,
}

/// Handler for thread reads.
///
/// Returns every message of the first page, hidden ones included and flagged.
pub struct GetThreadMessagesHandler {
    service: Arc<dyn AssistantService>,
}

impl GetThreadMessagesHandler {
    pub fn new(service: Arc<dyn AssistantService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, query: GetThreadMessagesQuery) -> Result<Thread, AssistantError> {
        let list = self.service.list_messages(&query.thread_id).await?;
        if list.has_more {
            tracing::debug!(thread_id = %query.thread_id, "Thread has more messages than one page");
        }

        Ok(list.data.into_iter().collect())
    }
}
