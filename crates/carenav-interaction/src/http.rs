//! Shared JSON-over-HTTP plumbing for the endpoint clients.

use std::time::Duration;

use carenav_core::endpoint::EndpointError;
use carenav_core::error::{CarenavError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Builds the shared client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| CarenavError::config(format!("Failed to build HTTP client: {err}")))
}

/// Posts `body` as JSON and returns the status and the raw response text.
///
/// The body is read even for error statuses so callers can surface the
/// server's own message. An unreadable body is treated as empty.
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
) -> std::result::Result<(StatusCode, String), EndpointError> {
    let response = client
        .post(url)
        .header("content-type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|err| {
            warn!(url, error = %err, "request failed");
            EndpointError::Transport(format!("request to {url} failed: {err}"))
        })?;

    let status = response.status();
    let text = response.text().await.unwrap_or_else(|err| {
        debug!(url, error = %err, "failed to read response body");
        String::new()
    });
    debug!(url, status = status.as_u16(), bytes = text.len(), "response received");

    Ok((status, text))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Maps a non-success status to [`EndpointError::Server`], keeping the
/// `error` field of a JSON body when there is one.
pub(crate) fn map_http_error(status: StatusCode, body: &str) -> EndpointError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|wrapper| wrapper.error);

    warn!(status = status.as_u16(), message = ?message, "server reported failure");

    EndpointError::Server {
        status: status.as_u16(),
        message,
    }
}
