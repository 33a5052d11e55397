//! JSON POST helper with an abort timeout. Request bodies carry passwords and
//! CAPTCHA tokens, so nothing here inspects or logs them.

use super::{
    config::AppConfig,
    errors::AppError,
    http::{HttpReply, build_url_with_base},
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

/// Milliseconds before an in-flight request is aborted.
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// POSTs `body` as JSON to `path` under the configured API base and returns
/// the reply whatever its status, so callers can read error payloads.
///
/// # Errors
/// `Serialization` if the body cannot be encoded, `Timeout` when the abort
/// timer fires first, `Network` for any other fetch failure.
pub async fn post_json_reply<B: Serialize>(path: &str, body: &B) -> Result<HttpReply, AppError> {
    let config = AppConfig::load();
    let url = build_url_with_base(&config.api_base_url, path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    let response = send_with_timeout(|signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    // An unreadable body is treated like an empty one; the status still counts.
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status, "POST {path} completed");
    Ok(HttpReply::new(status, body))
}

async fn send_with_timeout(
    build: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());

    let result = build(&signal)?.send().await;
    drop(timer);

    result.map_err(|err| {
        if signal.aborted() {
            AppError::Timeout(format!("Request timed out after {REQUEST_TIMEOUT_MS}ms."))
        } else {
            AppError::Network(format!("Unable to reach the server: {err}"))
        }
    })
}
