//! HTTP API and the interview WebSocket
//!
//! One WebSocket connection carries one interview: JSON events in
//! (`start`, `audio`, `stop`), interviewer utterances out. Read-only
//! inspection endpoints expose session status and history.

mod handlers;
mod routes;
mod state;
mod ws;

pub use routes::create_router;
pub use state::AppState;
pub use ws::{ClientEvent, ServerEvent};
