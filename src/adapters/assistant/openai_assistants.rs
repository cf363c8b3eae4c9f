//! OpenAI Assistants client - Implementation of AssistantService for the
//! OpenAI Assistants API (v2).
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIAssistantsConfig::new(api_key)
//!     .with_base_url("https://api.openai.com/v1")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let client = OpenAIAssistantsClient::new(config)?;
//! ```
//!
//! Every request carries bearer auth and the `OpenAI-Beta: assistants=v2`
//! header. Identifiers from the caller are appended as encoded path segments,
//! and the dot segments `.` and `..` are rejected, so a thread id can never
//! address a different endpoint.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::ports::{
    AssistantError, AssistantService, Message, MessageList, NewMessage, Run, Thread, ToolOutput,
};

const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_VALUE: &str = "assistants=v2";

/// Configuration for the OpenAI Assistants client.
#[derive(Debug, Clone)]
pub struct OpenAIAssistantsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl OpenAIAssistantsConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI Assistants API client.
pub struct OpenAIAssistantsClient {
    config: OpenAIAssistantsConfig,
    base_url: Url,
    client: Client,
}

impl OpenAIAssistantsClient {
    /// Creates a client; fails if the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: OpenAIAssistantsConfig) -> Result<Self, AssistantError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AssistantError::InvalidRequest(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AssistantError::InvalidRequest(format!(
                "Invalid base URL {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Builds an endpoint URL from path segments.
    ///
    /// `Url` drops `.` and `..` segments instead of encoding them, so they are
    /// refused here.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AssistantError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(AssistantError::InvalidRequest(format!(
                "Invalid path segment '{}'",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(self.config.api_key())
            .header(BETA_HEADER, BETA_VALUE)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AssistantError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(url = %url, "GET assistant API");
        let response = self.request(Method::GET, url).send().await;
        self.parse_response(response).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, AssistantError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(url = %url, "POST assistant API");
        let response = self.request(Method::POST, url).json(body).send().await;
        self.parse_response(response).await
    }

    /// Maps transport errors, checks status, and decodes the body.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: Result<Response, reqwest::Error>,
    ) -> Result<T, AssistantError> {
        let response = response.map_err(|e| {
            if e.is_timeout() {
                AssistantError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                AssistantError::network(format!("Connection failed: {}", e))
            } else {
                AssistantError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AssistantError::parse(format!("Failed to parse response: {}", e)))
    }
}

/// Maps a non-success status and its body to an error.
fn error_from_status(status: StatusCode, body: &str) -> AssistantError {
    let message = error_message(body).unwrap_or_else(|| format!("{}: {}", status, body));

    match status.as_u16() {
        401 | 403 => AssistantError::AuthenticationFailed,
        404 => AssistantError::NotFound(message),
        429 => AssistantError::RateLimited(message),
        400..=499 => AssistantError::InvalidRequest(message),
        500..=599 => AssistantError::unavailable(format!("Server error {}: {}", status, message)),
        _ => AssistantError::network(format!("Unexpected status {}: {}", status, message)),
    }
}

/// Extracts `error.message` from a provider error body.
fn error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    parsed
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl AssistantService for OpenAIAssistantsClient {
    async fn create_thread(&self) -> Result<Thread, AssistantError> {
        self.post(&["threads"], &json!({})).await
    }

    async fn create_message(
        &self,
        thread_id: &str,
        message: NewMessage,
    ) -> Result<Message, AssistantError> {
        self.post(&["threads", thread_id, "messages"], &message).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, AssistantError> {
        self.get(&["threads", thread_id, "messages"]).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, AssistantError> {
        self.post(
            &["threads", thread_id, "runs"],
            &json!({ "assistant_id": assistant_id }),
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, AssistantError> {
        self.get(&["threads", thread_id, "runs", run_id]).await
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        tool_outputs: Vec<ToolOutput>,
    ) -> Result<Run, AssistantError> {
        self.post(
            &["threads", thread_id, "runs", run_id, "submit_tool_outputs"],
            &json!({ "tool_outputs": tool_outputs }),
        )
        .await
    }
}
