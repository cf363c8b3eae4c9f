//! HTTP routes for relay endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_run, get_thread, get_thread_history, post_new, post_thread, post_tool, root,
    upload_files, RelayAppState,
};

/// Creates the relay router with all endpoints.
///
/// Routes:
/// - `GET /` - Welcome message
/// - `GET /api/threads/:thread_id/history` - Placeholder acknowledgement
/// - `POST /api/upload` - Placeholder acknowledgement
/// - `POST /api/new` - Open a conversation
/// - `GET /api/threads/:thread_id/runs/:run_id` - Run status
/// - `POST /api/threads/:thread_id/runs/:run_id/tool` - Submit tool outputs
/// - `GET /api/threads/:thread_id` - Thread messages
/// - `POST /api/threads/:thread_id` - Post a user message
pub fn relay_router() -> Router<RelayAppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/threads/:thread_id/history", get(get_thread_history))
        .route("/api/upload", post(upload_files))
        .route("/api/new", post(post_new))
        .route("/api/threads/:thread_id/runs/:run_id", get(get_run))
        .route("/api/threads/:thread_id/runs/:run_id/tool", post(post_tool))
        .route("/api/threads/:thread_id", get(get_thread).post(post_thread))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assistant::{AssistantCall, MockAssistantService, MockError};
    use crate::ports::Run;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(service: &MockAssistantService) -> Router {
        relay_router().with_state(RelayAppState::new(Arc::new(service.clone()), "asst_1"))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_returns_welcome() {
        let (status, body) = send(app(&MockAssistantService::new()), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Welcome to the ChatPly"}));
    }

    #[tokio::test]
    async fn history_is_acknowledged_without_calls() {
        let service = MockAssistantService::new();
        let (status, body) = send(app(&service), get("/api/threads/anything/history")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Thread history retrieved successfully"})
        );
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn new_conversation_returns_run_status() {
        let service = MockAssistantService::new();
        let (status, body) = send(
            app(&service),
            Request::builder()
                .method("POST")
                .uri("/api/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "queued");
        assert!(body["required_action"].is_null());
        let thread_id = body["thread_id"].as_str().unwrap();
        assert_eq!(service.thread_messages(thread_id).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn run_status_echoes_path() {
        let service = MockAssistantService::new().with_run(Run {
            id: "run_9".to_string(),
            thread_id: "thread_9".to_string(),
            assistant_id: "asst_1".to_string(),
            status: "in_progress".to_string(),
            required_action: None,
            last_error: None,
        });

        let (status, body) = send(app(&service), get("/api/threads/thread_9/runs/run_9")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["run_id"], "run_9");
        assert_eq!(body["thread_id"], "thread_9");
        assert_eq!(body["status"], "in_progress");
    }

    #[tokio::test]
    async fn tool_outputs_are_forwarded() {
        let service = MockAssistantService::new().with_run(Run {
            id: "run_1".to_string(),
            thread_id: "thread_1".to_string(),
            assistant_id: "asst_1".to_string(),
            status: "requires_action".to_string(),
            required_action: Some(json!({"type": "submit_tool_outputs"})),
            last_error: None,
        });

        let (status, body) = send(
            app(&service),
            post_json(
                "/api/threads/thread_1/runs/run_1/tool",
                json!([{"tool_call_id": "call_1", "output": "42"}]),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["run_id"], "run_1");
        assert!(matches!(
            &service.calls()[0],
            AssistantCall::SubmitToolOutputs { tool_outputs, .. } if tool_outputs.len() == 1
        ));
    }

    #[tokio::test]
    async fn malformed_tool_body_is_rejected_before_any_call() {
        let service = MockAssistantService::new();
        let (status, _) = send(
            app(&service),
            post_json(
                "/api/threads/thread_1/runs/run_1/tool",
                json!({"tool_call_id": "call_1"}),
            ),
        )
        .await;

        assert!(status.is_client_error());
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn post_message_starts_run() {
        let service = MockAssistantService::new().with_thread("thread_1", vec![]);
        let (status, body) = send(
            app(&service),
            post_json("/api/threads/thread_1", json!({"content": "hello"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["thread_id"], "thread_1");
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn get_thread_lists_messages() {
        let service = MockAssistantService::new().with_thread("thread_1", vec![]);
        send(
            app(&service),
            post_json("/api/threads/thread_1", json!({"content": "hello"})),
        )
        .await;

        let (status, body) = send(app(&service), get("/api/threads/thread_1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"][0]["content"], "hello");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["hidden"], false);
    }

    #[tokio::test]
    async fn upstream_failure_is_generic_500() {
        let service = MockAssistantService::new()
            .with_thread("thread_1", vec![])
            .with_error(MockError::Unavailable {
                message: "secret upstream detail".to_string(),
            });

        let (status, body) = send(app(&service), get("/api/threads/thread_1")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "An internal error occurred");
    }
}
