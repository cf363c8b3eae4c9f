//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the relay and the outside world. Adapters implement these ports.
//!
//! - `AssistantService` - Hosted assistant API (threads, messages, runs)

mod assistant_service;

pub use assistant_service::{
    AssistantError, AssistantService, Message, MessageContent, MessageList, MessageText,
    NewMessage, Run, Thread, ToolOutput,
};
