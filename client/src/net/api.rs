//! REST API helpers for the backend action surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so the controller can surface
//! failures through one notice path. Calls race a fixed timeout; a hung
//! request resolves to [`ApiError::Timeout`] instead of wedging the UI in a
//! disabled state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use events::ParticipantId;

#[cfg(feature = "hydrate")]
use super::types::{ActionResponse, ActivateRequest};

/// Milliseconds before an outstanding request resolves to [`ApiError::Timeout`].
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
const ACTIVATE_ENDPOINT: &str = "/api/ai/activate";
#[cfg(any(test, feature = "hydrate"))]
const START_ENDPOINT: &str = "/api/discussion/start";
#[cfg(any(test, feature = "hydrate"))]
const STOP_ENDPOINT: &str = "/api/discussion/stop";
const REPORT_ENDPOINT: &str = "/api/report/download";

/// Errors produced by backend action calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (socket, serialization, DNS).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The server processed the request and refused it. The message is shown
    /// to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    /// No response within [`REQUEST_TIMEOUT_MS`].
    #[error("request timed out")]
    Timeout,
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(error: Option<String>, fallback: &str) -> String {
    error
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// URL the browser navigates to for the final report download.
#[must_use]
pub fn report_download_url() -> &'static str {
    REPORT_ENDPOINT
}

/// Activate one participant via `POST /api/ai/activate`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, times out, or the server
/// refuses the activation.
pub async fn activate_participant(id: ParticipantId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async move {
            let resp = gloo_net::http::Request::post(ACTIVATE_ENDPOINT)
                .json(&ActivateRequest { ai_id: id })
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: ActionResponse = resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if body.success {
                Ok(())
            } else {
                Err(ApiError::Rejected(rejection_message(body.error, "activation refused")))
            }
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Start the discussion by uploading the selected charts as multipart
/// `charts` entries via `POST /api/discussion/start`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the upload fails, times out, or the server
/// refuses to start; a refusal carries the server's message verbatim.
#[cfg(feature = "hydrate")]
pub async fn start_discussion(charts: &[(String, web_sys::File)]) -> Result<(), ApiError> {
    with_timeout(async move {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("form allocation failed".to_owned()))?;
        for (name, blob) in charts {
            form.append_with_blob_and_filename("charts", blob, name)
                .map_err(|_| ApiError::Transport("form append failed".to_owned()))?;
        }
        let resp = gloo_net::http::Request::post(START_ENDPOINT)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: ActionResponse = resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(rejection_message(body.error, "failed to start the discussion")))
        }
    })
    .await
}

/// Ask the server to stop the discussion and discard session data via
/// `POST /api/discussion/stop`. The caller reloads the page regardless of
/// the outcome.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or times out; callers log
/// it and reload anyway.
pub async fn stop_discussion() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let resp = gloo_net::http::Request::post(STOP_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(ApiError::Status(resp.status()))
            }
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Race a request against the fixed timeout.
#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    request: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}
