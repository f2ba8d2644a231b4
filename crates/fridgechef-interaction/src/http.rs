//! Request plumbing shared by the OpenAI collaborators.

use fridgechef_core::error::FridgeError;
use reqwest::{Response, StatusCode};
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

pub(crate) fn request_failed(service: &'static str, err: reqwest::Error) -> FridgeError {
    FridgeError::collaborator(service, format!("OpenAI API request failed: {err}"))
}

/// Returns the response if it succeeded, otherwise the API error message.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: Response,
) -> Result<Response, FridgeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
    Err(map_http_error(service, status, &body))
}

fn map_http_error(service: &'static str, status: StatusCode, body: &str) -> FridgeError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());
    FridgeError::collaborator(service, format!("HTTP {}: {}", status.as_u16(), message))
}
