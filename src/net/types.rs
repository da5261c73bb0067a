//! Wire types for the remote completion endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// JSON body sent with each prompt.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
}

/// JSON body of a successful reply.
#[derive(Clone, Debug, Deserialize)]
pub struct CompletionReply {
    pub bot: String,
}

/// Failure modes of one completion request.
///
/// Transport failures, non-2xx statuses, and malformed reply bodies all
/// land here so the caller settles every one of them into the same
/// failed-turn presentation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// The request never produced a response.
    #[error("completion request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered 2xx but the body was not a valid reply.
    #[error("malformed completion reply: {0}")]
    Decode(String),

    /// Requests are only possible in a browser build.
    #[error("completion endpoint unavailable outside the browser")]
    Unavailable,
}

impl CompletionError {
    /// Detail string surfaced inline under a failed turn: the
    /// server-provided body when there is one, the error text otherwise.
    pub fn detail(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}
