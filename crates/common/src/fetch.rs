//! Outbound JSON fetch helpers
//!
//! One GET per call; no retry, pagination or caching.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::types::Todo;
use crate::CoreError;

/// GET `url` and decode the body as `T`.
///
/// Transport failures map to `Network`, any non-2xx status to `Status`,
/// and a body that does not decode as `T` to `Parse`.
#[instrument(skip(client))]
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, CoreError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| CoreError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(CoreError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
        });
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| CoreError::Network(e.to_string()))?;
    debug!(status = status.as_u16(), len = bytes.len(), "fetched body");
    serde_json::from_slice(&bytes).map_err(|e| CoreError::Parse(e.to_string()))
}

pub async fn fetch_todos(client: &reqwest::Client, url: &str) -> Result<Vec<Todo>, CoreError> {
    fetch_json::<Vec<Todo>>(client, url).await
}
