//! HTTP call to the external analytics endpoint.
//!
//! Client-side (csr): one real call via `gloo-net`. Native builds get a
//! stub error, since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure class maps to a `RequestError` variant; the query panel
//! collapses them into one fallback message and logs the detail once. No
//! retries, no distinction by status code at the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "csr")]
use super::types::{AskRequest, AskResponse};

/// Fixed local endpoint of the (unimplemented, external) analytics backend.
pub const ASK_ENDPOINT: &str = "http://localhost:8000/test-llm";

/// Request failure classes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Send one question and return the answer text.
///
/// # Errors
///
/// Any transport failure, non-2xx status, or undecodable body.
pub async fn ask(question: &str) -> Result<String, RequestError> {
    #[cfg(feature = "csr")]
    {
        let body = AskRequest { question: question.to_owned() };
        let resp = gloo_net::http::Request::post(ASK_ENDPOINT)
            .json(&body)
            .map_err(|e| RequestError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestError::Status(resp.status()));
        }
        let parsed: AskResponse = resp
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))?;
        Ok(parsed.answer)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = question;
        Err(RequestError::Transport("no browser transport".to_owned()))
    }
}
