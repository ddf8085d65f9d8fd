//! Clients for Ollama-style generation backends.
//!
//! Each backend exposes `POST /api/generate` with a prompt-in/text-out
//! contract and `GET /api/tags` as its liveness endpoint. Prompting,
//! anonymization, and review parsing all happen on this side of the wire;
//! the backend only ever sees a single prompt string.

mod chairman;
mod member;
pub(crate) mod protocol;

pub use chairman::HttpChairmanClient;
pub use member::HttpMemberClient;

use council_application::BackendError;

/// Map a reqwest transport failure onto the port error taxonomy.
pub(crate) fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Unreachable(e.to_string())
    }
}
