//! GetRunStatusHandler - Query handler for observing a run.

use std::sync::Arc;

use crate::domain::RunStatus;
use crate::ports::{AssistantError, AssistantService};

/// Query to get the status of a run.
#[derive(Debug, Clone)]
pub struct GetRunStatusQuery {
    pub thread_id: String,
    pub run_id: String,
}

/// Handler for run status lookups.
pub struct GetRunStatusHandler {
    service: Arc<dyn AssistantService>,
}

impl GetRunStatusHandler {
    pub fn new(service: Arc<dyn AssistantService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, query: GetRunStatusQuery) -> Result<RunStatus, AssistantError> {
        let run = self
            .service
            .retrieve_run(&query.thread_id, &query.run_id)
            .await?;

        tracing::debug!(thread_id = %query.thread_id, run_id = %run.id, status = %run.status, "Run status fetched");
        Ok(RunStatus::from_run(run, query.thread_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assistant::MockAssistantService;
    use crate::ports::Run;
    use proptest::prelude::*;
    use serde_json::json;

    fn run(thread_id: &str, run_id: &str, status: &str) -> Run {
        Run {
            id: run_id.to_string(),
            thread_id: thread_id.to_string(),
            assistant_id: "asst_1".to_string(),
            status: status.to_string(),
            required_action: None,
            last_error: None,
        }
    }

    #[tokio::test]
    async fn relays_status_and_opaque_fields() {
        let mut seeded = run("thread_1", "run_1", "requires_action");
        seeded.required_action = Some(json!({"type": "submit_tool_outputs"}));
        let handler =
            GetRunStatusHandler::new(Arc::new(MockAssistantService::new().with_run(seeded)));

        let status = handler
            .handle(GetRunStatusQuery {
                thread_id: "thread_1".to_string(),
                run_id: "run_1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(status.status, "requires_action");
        assert_eq!(
            status.required_action,
            Some(json!({"type": "submit_tool_outputs"}))
        );
    }

    #[tokio::test]
    async fn unknown_run_is_an_error() {
        let handler = GetRunStatusHandler::new(Arc::new(MockAssistantService::new()));

        let result = handler
            .handle(GetRunStatusQuery {
                thread_id: "thread_1".to_string(),
                run_id: "run_missing".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AssistantError::NotFound(_))));
    }

    proptest! {
        #[test]
        fn echoes_identifiers(thread_id in "[A-Za-z0-9_-]{1,40}", run_id in "[A-Za-z0-9_-]{1,40}") {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let service = MockAssistantService::new().with_run(run(&thread_id, &run_id, "in_progress"));
            let handler = GetRunStatusHandler::new(Arc::new(service));

            let status = runtime
                .block_on(handler.handle(GetRunStatusQuery {
                    thread_id: thread_id.clone(),
                    run_id: run_id.clone(),
                }))
                .unwrap();

            prop_assert_eq!(status.thread_id, thread_id);
            prop_assert_eq!(status.run_id, run_id);
        }
    }
}
