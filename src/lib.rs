//! Assistant Relay - HTTP relay for a hosted AI assistant
//!
//! This crate lets a web front end open conversation threads, post messages,
//! poll run status, and answer tool calls, while the provider credentials stay
//! on the server. It stores nothing; every request maps to one short sequence
//! of assistant API calls.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
