//! Shared HTTP plumbing for the backend clients.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::config::BackendConfig;
use crate::domain::{DomainError, DomainResult};

/// Error body shapes of PostgREST (`message`) and GoTrue (`msg`, `error_description`)
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Attach the project key and, when signed in, the user's bearer token.
pub(crate) fn authorize(
    builder: RequestBuilder,
    config: &BackendConfig,
    access_token: Option<&str>,
) -> RequestBuilder {
    let bearer = access_token.unwrap_or(&config.anon_key);
    builder
        .header("apikey", &config.anon_key)
        .header("Authorization", format!("Bearer {}", bearer))
}

/// Send and turn non-2xx answers into `DomainError`.
pub(crate) async fn send(builder: RequestBuilder) -> DomainResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| DomainError::Transport(e.to_string()))?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

pub(crate) async fn json<T: serde::de::DeserializeOwned>(response: Response) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::Decode(e.to_string()))
}

pub(crate) fn error_from_body(status: StatusCode, body: &str) -> DomainError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .or(parsed.error)
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body.to_string()
            }
        });

    if status == StatusCode::UNAUTHORIZED {
        DomainError::Unauthorized(message)
    } else {
        DomainError::Backend { status: status.as_u16(), message }
    }
}
