//! Domain layer containing the relay's local projections.
//!
//! # Module Organization
//!
//! - `thread` - Run status, thread message, and thread views shaped from provider objects

pub mod thread;

pub use thread::{RunStatus, Thread, ThreadMessage};
