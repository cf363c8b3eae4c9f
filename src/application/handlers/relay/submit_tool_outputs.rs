//! SubmitToolOutputsHandler - Command handler for answering a run's tool calls.

use std::sync::Arc;

use crate::domain::RunStatus;
use crate::ports::{AssistantError, AssistantService, ToolOutput};

/// Command to submit tool outputs to a run.
#[derive(Debug, Clone)]
pub struct SubmitToolOutputsCommand {
    pub thread_id: String,
    pub run_id: String,
    pub tool_outputs: Vec<ToolOutput>,
}

/// Handler for tool output submission.
///
/// The run must be waiting for tool outputs; the provider enforces that.
pub struct SubmitToolOutputsHandler {
    service: Arc<dyn AssistantService>,
}

impl SubmitToolOutputsHandler {
    pub fn new(service: Arc<dyn AssistantService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, cmd: SubmitToolOutputsCommand) -> Result<RunStatus, AssistantError> {
        let count = cmd.tool_outputs.len();
        let run = self
            .service
            .submit_tool_outputs(&cmd.thread_id, &cmd.run_id, cmd.tool_outputs)
            .await?;

        tracing::info!(thread_id = %cmd.thread_id, run_id = %run.id, outputs = count, "Tool outputs submitted");
        Ok(RunStatus::from_run(run, cmd.thread_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assistant::{AssistantCall, MockAssistantService, MockError};
    use crate::ports::Run;
    use serde_json::json;

    fn waiting_run() -> Run {
        Run {
            id: "run_1".to_string(),
            thread_id: "thread_1".to_string(),
            assistant_id: "asst_1".to_string(),
            status: "requires_action".to_string(),
            required_action: Some(json!({"type": "submit_tool_outputs"})),
            last_error: None,
        }
    }

    fn outputs() -> Vec<ToolOutput> {
        vec![
            ToolOutput {
                tool_call_id: "call_b".to_string(),
                output: "2".to_string(),
            },
            ToolOutput {
                tool_call_id: "call_a".to_string(),
                output: "1".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn forwards_outputs_in_order() {
        let service = MockAssistantService::new().with_run(waiting_run());
        let handler = SubmitToolOutputsHandler::new(Arc::new(service.clone()));

        let status = handler
            .handle(SubmitToolOutputsCommand {
                thread_id: "thread_1".to_string(),
                run_id: "run_1".to_string(),
                tool_outputs: outputs(),
            })
            .await
            .unwrap();

        assert_eq!(
            service.calls(),
            vec![AssistantCall::SubmitToolOutputs {
                thread_id: "thread_1".to_string(),
                run_id: "run_1".to_string(),
                tool_outputs: outputs(),
            }]
        );
        assert_eq!(status.run_id, "run_1");
        assert_eq!(status.thread_id, "thread_1");
        assert_eq!(status.status, "queued");
        assert!(status.required_action.is_none());
    }

    #[tokio::test]
    async fn provider_rejection_propagates() {
        let service = MockAssistantService::new()
            .with_run(waiting_run())
            .with_error(MockError::Unavailable {
                message: "Runs in status \"completed\" do not accept tool outputs.".to_string(),
            });
        let handler = SubmitToolOutputsHandler::new(Arc::new(service));

        let result = handler
            .handle(SubmitToolOutputsCommand {
                thread_id: "thread_1".to_string(),
                run_id: "run_1".to_string(),
                tool_outputs: outputs(),
            })
            .await;

        assert!(matches!(result, Err(AssistantError::Unavailable(_))));
    }
}
