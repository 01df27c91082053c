//! Generic HTTP fetching with typed parsing and error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Maps a non-success upstream status code to the matching error variant.
pub fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Classifies a body that failed to deserialize into `T`.
pub(crate) fn parse_error(response_text: &str, err: &serde_json::Error, url: &str) -> AppError {
    let trimmed = response_text.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else if err.is_syntax() || err.is_eof() {
        AppError::api_malformed_json(err.to_string(), url)
    } else {
        // Valid JSON but unexpected structure
        AppError::api_unexpected_structure(err.to_string(), url)
    }
}

/// Issues exactly one GET request and parses the body into `T`.
///
/// There is no retry and no response cache: a single failed call surfaces
/// immediately as a typed error.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(crate) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(parse_error(&response_text, &e, url))
        }
    }
}
