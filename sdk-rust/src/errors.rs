use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-OK status code. The message carries the
    /// response body verbatim when the service sent one.
    #[error("{1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the service was unexpected (e.g. a 2xx image
    /// response without a `url` field, or a listing without any recognizable
    /// url array).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
    /// Single-image resolution exhausted its page-walk budget without a
    /// match. Distinct from any transport or protocol failure.
    #[error("Image {0} not found")]
    NotFound(String),
}

pub type ImageServiceResult<T> = Result<T, ImageServiceError>;
