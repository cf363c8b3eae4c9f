//! HTTP adapter for relay endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateMessageRequest, ErrorResponse, MessageResponse, RunStatusResponse,
    ThreadMessageResponse, ThreadResponse, ToolOutputRequest,
};
pub use handlers::{RelayApiError, RelayAppState};
pub use routes::relay_router;
