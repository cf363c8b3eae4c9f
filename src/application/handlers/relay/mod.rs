//! Relay command and query handlers.

mod get_run_status;
mod get_thread_messages;
mod post_message;
mod start_conversation;
mod submit_tool_outputs;

pub use get_run_status::{GetRunStatusHandler, GetRunStatusQuery};
pub use get_thread_messages::{GetThreadMessagesHandler, GetThreadMessagesQuery};
pub use post_message::{PostMessageCommand, PostMessageHandler};
pub use start_conversation::StartConversationHandler;
pub use submit_tool_outputs::{SubmitToolOutputsCommand, SubmitToolOutputsHandler};
