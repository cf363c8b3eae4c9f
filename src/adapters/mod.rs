//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the relay to external systems:
//! - `assistant` - Assistant service clients (OpenAI, in-memory mock)
//! - `http` - axum router and endpoint handlers

pub mod assistant;
pub mod http;

pub use self::assistant::{MockAssistantService, OpenAIAssistantsClient, OpenAIAssistantsConfig};
pub use self::http::{app_router, RelayAppState};
