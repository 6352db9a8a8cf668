pub mod dashboard;

use common::{ApiResponse, ErrorResponse};
use gloo_net::http::Request;
use serde::Deserialize;
use std::fmt;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Failure of an API call, as seen by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The requested prefecture or municipality does not exist.
    NotFound,
    /// Network, backend or decoding failure.
    Failed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => f.write_str("Not found"),
            ApiError::Failed(message) => f.write_str(message),
        }
    }
}

/// Common GET request handler. Unwraps the `ApiResponse` envelope.
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        ApiError::Failed(error_msg)
    })?;

    // 400 only comes from path code validation, so the row cannot exist
    if matches!(response.status(), 400 | 404) {
        log::warn!("GET {} - Not found ({})", endpoint, response.status());
        return Err(ApiError::NotFound);
    }

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(ApiError::Failed(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error: {} ({})", endpoint, err.error, err.code);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        }));
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        ApiError::Failed(error_msg)
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}
