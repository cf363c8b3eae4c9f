//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer sequences calls to the assistant service and shapes their
//! results into domain projections. Commands (write) and queries (read) are
//! kept in separate handlers.

pub mod handlers;

pub use handlers::{
    GetRunStatusHandler, GetRunStatusQuery, GetThreadMessagesHandler, GetThreadMessagesQuery,
    PostMessageCommand, PostMessageHandler, StartConversationHandler, SubmitToolOutputsCommand,
    SubmitToolOutputsHandler,
};
