use crate::ImageServiceError;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON POST request, parse the response.
/// Throws error on non OK status code.
pub async fn post_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, ImageServiceError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(status_error(status, response.text().await.unwrap_or_default()))
    }
}

/// Create a GET request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: reqwest::header::HeaderMap,
) -> Result<R, ImageServiceError> {
    let response = client.get(url).headers(headers).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(status_error(status, response.text().await.unwrap_or_default()))
    }
}

/// A non-2xx status carries the response body verbatim when there is one,
/// otherwise a generic French message with the status code.
fn status_error(status: reqwest::StatusCode, body: String) -> ImageServiceError {
    let trimmed = body.trim();
    let message = if trimmed.is_empty() {
        format!("Requête échouée ({})", status.as_u16())
    } else {
        trimmed.to_string()
    };
    ImageServiceError::StatusCode(status, message)
}
