//! Mock Assistant Service for testing.
//!
//! Keeps threads, messages, and runs in memory so the relay can be exercised
//! without calling the hosted API.
//!
//! # Features
//!
//! - Seeded threads and runs
//! - Error injection (outcomes are consumed in order, one per call)
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockAssistantService::new()
//!     .with_thread("thread_1", vec![])
//!     .with_error(MockError::Unavailable { message: "down".into() });
//!
//! assert!(service.create_thread().await.is_err());
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::ports::{
    AssistantError, AssistantService, Message, MessageContent, MessageList, MessageText,
    NewMessage, Run, Thread, ToolOutput,
};

/// A call received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantCall {
    CreateThread,
    CreateMessage {
        thread_id: String,
        message: NewMessage,
    },
    ListMessages {
        thread_id: String,
    },
    CreateRun {
        thread_id: String,
        assistant_id: String,
    },
    RetrieveRun {
        thread_id: String,
        run_id: String,
    },
    SubmitToolOutputs {
        thread_id: String,
        run_id: String,
        tool_outputs: Vec<ToolOutput>,
    },
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    AuthenticationFailed,
    NotFound { message: String },
    RateLimited { message: String },
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for AssistantError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::AuthenticationFailed => AssistantError::AuthenticationFailed,
            MockError::NotFound { message } => AssistantError::NotFound(message),
            MockError::RateLimited { message } => AssistantError::RateLimited(message),
            MockError::Unavailable { message } => AssistantError::unavailable(message),
            MockError::Network { message } => AssistantError::network(message),
            MockError::Timeout { timeout_secs } => AssistantError::Timeout { timeout_secs },
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u64,
    /// Messages per thread, oldest first.
    threads: HashMap<String, Vec<Message>>,
    runs: HashMap<String, Run>,
}

impl MockState {
    fn next_id(&mut self, prefix: &str) -> (String, i64) {
        self.next_id += 1;
        (format!("{}_{}", prefix, self.next_id), self.next_id as i64)
    }

    fn thread_mut(&mut self, thread_id: &str) -> Result<&mut Vec<Message>, AssistantError> {
        self.threads
            .get_mut(thread_id)
            .ok_or_else(|| AssistantError::NotFound(format!("No thread found with id '{}'", thread_id)))
    }

    fn run_mut(&mut self, thread_id: &str, run_id: &str) -> Result<&mut Run, AssistantError> {
        self.runs
            .get_mut(run_id)
            .filter(|run| run.thread_id == thread_id)
            .ok_or_else(|| AssistantError::NotFound(format!("No run found with id '{}'", run_id)))
    }
}

/// In-memory assistant service.
///
/// Clones share state, so a test can keep a handle while the relay owns another.
#[derive(Debug, Clone, Default)]
pub struct MockAssistantService {
    state: Arc<Mutex<MockState>>,
    /// Queued outcomes; `None` lets a call through.
    errors: Arc<Mutex<VecDeque<Option<MockError>>>>,
    calls: Arc<Mutex<Vec<AssistantCall>>>,
}

impl MockAssistantService {
    /// Creates an empty mock service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a thread with messages (oldest first).
    pub fn with_thread(self, thread_id: impl Into<String>, messages: Vec<Message>) -> Self {
        self.state
            .lock()
            .unwrap()
            .threads
            .insert(thread_id.into(), messages);
        self
    }

    /// Seeds a run. Its thread is created if missing.
    pub fn with_run(self, run: Run) -> Self {
        let mut state = self.state.lock().unwrap();
        state.threads.entry(run.thread_id.clone()).or_default();
        state.runs.insert(run.id.clone(), run);
        drop(state);
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: MockError) -> Self {
        self.errors.lock().unwrap().push_back(Some(error));
        self
    }

    /// Lets the next call through, so a later queued error hits a later call.
    pub fn with_success(self) -> Self {
        self.errors.lock().unwrap().push_back(None);
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<AssistantCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the stored messages of a thread, oldest first.
    pub fn thread_messages(&self, thread_id: &str) -> Option<Vec<Message>> {
        self.state.lock().unwrap().threads.get(thread_id).cloned()
    }

    /// Records the call and pops a queued error, if any.
    fn record(&self, call: AssistantCall) -> Result<(), AssistantError> {
        self.calls.lock().unwrap().push(call);
        match self.errors.lock().unwrap().pop_front() {
            Some(Some(error)) => Err(error.into()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AssistantService for MockAssistantService {
    async fn create_thread(&self) -> Result<Thread, AssistantError> {
        self.record(AssistantCall::CreateThread)?;

        let mut state = self.state.lock().unwrap();
        let (id, created_at) = state.next_id("thread");
        state.threads.insert(id.clone(), Vec::new());
        Ok(Thread {
            id,
            created_at,
            metadata: None,
        })
    }

    async fn create_message(
        &self,
        thread_id: &str,
        message: NewMessage,
    ) -> Result<Message, AssistantError> {
        self.record(AssistantCall::CreateMessage {
            thread_id: thread_id.to_string(),
            message: message.clone(),
        })?;

        let mut state = self.state.lock().unwrap();
        let (id, created_at) = state.next_id("msg");
        let stored = Message {
            id,
            role: message.role,
            created_at,
            content: vec![MessageContent::Text {
                text: MessageText {
                    value: message.content,
                    annotations: Vec::new(),
                },
            }],
            metadata: message.metadata.map(|m| {
                m.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::String(v)))
                    .collect()
            }),
        };
        state.thread_mut(thread_id)?.push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, AssistantError> {
        self.record(AssistantCall::ListMessages {
            thread_id: thread_id.to_string(),
        })?;

        let mut state = self.state.lock().unwrap();
        // Newest first, like the hosted API's default ordering.
        let data = state.thread_mut(thread_id)?.iter().rev().cloned().collect();
        Ok(MessageList {
            data,
            has_more: false,
        })
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, AssistantError> {
        self.record(AssistantCall::CreateRun {
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
        })?;

        let mut state = self.state.lock().unwrap();
        state.thread_mut(thread_id)?;
        let (id, _) = state.next_id("run");
        let run = Run {
            id: id.clone(),
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
            status: "queued".to_string(),
            required_action: None,
            last_error: None,
        };
        state.runs.insert(id, run.clone());
        Ok(run)
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, AssistantError> {
        self.record(AssistantCall::RetrieveRun {
            thread_id: thread_id.to_string(),
            run_id: run_id.to_string(),
        })?;

        let mut state = self.state.lock().unwrap();
        state.run_mut(thread_id, run_id).map(|run| run.clone())
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        tool_outputs: Vec<ToolOutput>,
    ) -> Result<Run, AssistantError> {
        self.record(AssistantCall::SubmitToolOutputs {
            thread_id: thread_id.to_string(),
            run_id: run_id.to_string(),
            tool_outputs,
        })?;

        let mut state = self.state.lock().unwrap();
        let run = state.run_mut(thread_id, run_id)?;
        run.status = "queued".to_string();
        run.required_action = None;
        Ok(run.clone())
    }
}
