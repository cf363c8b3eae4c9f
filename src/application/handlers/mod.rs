//! Application handlers.
//!
//! Command and query handlers that orchestrate calls to the assistant service.

pub mod relay;

pub use relay::{
    GetRunStatusHandler, GetRunStatusQuery, GetThreadMessagesHandler, GetThreadMessagesQuery,
    PostMessageCommand, PostMessageHandler, StartConversationHandler, SubmitToolOutputsCommand,
    SubmitToolOutputsHandler,
};
