//! Assistant Service Adapters.
//!
//! Implementations of the AssistantService port.
//!
//! ## Available Adapters
//!
//! - `OpenAIAssistantsClient` - OpenAI Assistants API (v2) over HTTPS
//! - `MockAssistantService` - In-memory threads and runs for testing

mod mock_service;
mod openai_assistants;

pub use mock_service::{AssistantCall, MockAssistantService, MockError};
pub use openai_assistants::{OpenAIAssistantsClient, OpenAIAssistantsConfig};
