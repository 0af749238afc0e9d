use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Problems with the client's request, caught before anything is sent upstream.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Please provide either \"url\" or \"id\" parameter")]
    MissingParameter,
    #[error("Invalid paste ID format")]
    InvalidPasteId,
    #[error("No JSON data provided")]
    NoJsonData,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::InvalidPasteId => StatusCode::BAD_REQUEST,
            ApiError::NoJsonData => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Why a fetch from the paste service did not produce a paste.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or non-success status from the transport.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered, but the body wasn't a paste we could read.
    #[error("Error: {0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        FetchError::Unexpected(source.to_string())
    }
}
