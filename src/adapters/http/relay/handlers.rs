//! HTTP handlers for relay endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::relay::{
    GetRunStatusHandler, GetRunStatusQuery, GetThreadMessagesHandler, GetThreadMessagesQuery,
    PostMessageCommand, PostMessageHandler, StartConversationHandler, SubmitToolOutputsCommand,
    SubmitToolOutputsHandler,
};
use crate::ports::{AssistantError, AssistantService};

use super::dto::{
    CreateMessageRequest, ErrorResponse, MessageResponse, RunStatusResponse, ThreadResponse,
    ToolOutputRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RelayAppState {
    start_handler: Arc<StartConversationHandler>,
    run_status_handler: Arc<GetRunStatusHandler>,
    tool_outputs_handler: Arc<SubmitToolOutputsHandler>,
    messages_handler: Arc<GetThreadMessagesHandler>,
    post_message_handler: Arc<PostMessageHandler>,
}

impl RelayAppState {
    /// Wires every handler to one assistant service and assistant id.
    pub fn new(service: Arc<dyn AssistantService>, assistant_id: impl Into<String>) -> Self {
        let assistant_id = assistant_id.into();
        Self {
            start_handler: Arc::new(StartConversationHandler::new(
                service.clone(),
                assistant_id.clone(),
            )),
            run_status_handler: Arc::new(GetRunStatusHandler::new(service.clone())),
            tool_outputs_handler: Arc::new(SubmitToolOutputsHandler::new(service.clone())),
            messages_handler: Arc::new(GetThreadMessagesHandler::new(service.clone())),
            post_message_handler: Arc::new(PostMessageHandler::new(service, assistant_id)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Static endpoints
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Welcome message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the ChatPly"))
}

/// GET /api/threads/:thread_id/history - Placeholder, retrieves nothing
pub async fn get_thread_history(Path(thread_id): Path<String>) -> Json<MessageResponse> {
    tracing::debug!(thread_id = %thread_id, "Thread history requested");
    Json(MessageResponse::new("Thread history retrieved successfully"))
}

/// POST /api/upload - Placeholder, drains the body and stores nothing
pub async fn upload_files(multipart: Option<Multipart>) -> Json<MessageResponse> {
    let mut received = 0usize;
    if let Some(mut multipart) = multipart {
        while let Ok(Some(field)) = multipart.next_field().await {
            let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
            let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            tracing::debug!(file_name = %file_name, size, "Discarding uploaded file");
            received += 1;
        }
    }

    tracing::info!(files = received, "Upload accepted");
    Json(MessageResponse::new("Files uploaded successfully"))
}

// ════════════════════════════════════════════════════════════════════════════
// Relayed endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/new - Open a conversation
pub async fn post_new(
    State(state): State<RelayAppState>,
) -> Result<Json<RunStatusResponse>, RelayApiError> {
    let status = state.start_handler.handle().await?;
    Ok(Json(status.into()))
}

/// GET /api/threads/:thread_id/runs/:run_id - Run status
pub async fn get_run(
    State(state): State<RelayAppState>,
    Path((thread_id, run_id)): Path<(String, String)>,
) -> Result<Json<RunStatusResponse>, RelayApiError> {
    let query = GetRunStatusQuery { thread_id, run_id };
    let status = state.run_status_handler.handle(query).await?;
    Ok(Json(status.into()))
}

/// POST /api/threads/:thread_id/runs/:run_id/tool - Submit tool outputs
pub async fn post_tool(
    State(state): State<RelayAppState>,
    Path((thread_id, run_id)): Path<(String, String)>,
    Json(tool_outputs): Json<Vec<ToolOutputRequest>>,
) -> Result<Json<RunStatusResponse>, RelayApiError> {
    let cmd = SubmitToolOutputsCommand {
        thread_id,
        run_id,
        tool_outputs: tool_outputs.into_iter().map(Into::into).collect(),
    };
    let status = state.tool_outputs_handler.handle(cmd).await?;
    Ok(Json(status.into()))
}

/// GET /api/threads/:thread_id - Thread messages
pub async fn get_thread(
    State(state): State<RelayAppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ThreadResponse>, RelayApiError> {
    let thread = state
        .messages_handler
        .handle(GetThreadMessagesQuery { thread_id })
        .await?;
    Ok(Json(thread.into()))
}

/// POST /api/threads/:thread_id - Post a user message
pub async fn post_thread(
    State(state): State<RelayAppState>,
    Path(thread_id): Path<String>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<Json<RunStatusResponse>, RelayApiError> {
    let cmd = PostMessageCommand {
        thread_id,
        content: req.content,
    };
    let status = state.post_message_handler.handle(cmd).await?;
    Ok(Json(status.into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Any assistant service failure; always rendered as a generic 500.
#[derive(Debug)]
pub struct RelayApiError(AssistantError);

impl From<AssistantError> for RelayApiError {
    fn from(error: AssistantError) -> Self {
        Self(error)
    }
}

impl IntoResponse for RelayApiError {
    fn into_response(self) -> Response {
        tracing::error!("Assistant service call failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("An internal error occurred")),
        )
            .into_response()
    }
}
