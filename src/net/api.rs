//! HTTP access to the remote completion endpoint.
//!
//! Client-side (csr): real calls via `gloo-net`. Native builds get a stub
//! returning [`CompletionError::Unavailable`] since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode comes back as a [`CompletionError`] so callers can
//! settle connection errors, non-2xx statuses, and malformed bodies through
//! one path instead of letting any of them escape as an unhandled fault.

#![allow(clippy::unused_async)]

use super::types::CompletionError;

/// POST `prompt` to `endpoint` as `{"prompt": ...}` and return the reply's
/// `bot` field, untrimmed.
///
/// # Errors
///
/// [`CompletionError::Request`] when the request never completes,
/// [`CompletionError::Status`] (carrying the body text) on a non-2xx
/// answer, and [`CompletionError::Decode`] when a 2xx body is not a valid
/// reply.
pub async fn request_completion(endpoint: &str, prompt: &str) -> Result<String, CompletionError> {
    #[cfg(feature = "csr")]
    {
        use super::types::{CompletionReply, CompletionRequest};

        let resp = gloo_net::http::Request::post(endpoint)
            .json(&CompletionRequest { prompt })
            .map_err(|e| CompletionError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status: resp.status(), body });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;
        let reply: CompletionReply =
            serde_json::from_str(&body).map_err(|e| CompletionError::Decode(e.to_string()))?;

        Ok(reply.bot)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, prompt);
        Err(CompletionError::Unavailable)
    }
}
