//! Errors surfaced at the HTTP boundary.
//!
//! Not-found is the only error the handlers produce themselves. Body and path
//! extraction failures keep axum's default rejections.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rendered as a 404 with a plain-text body.
    #[error("Todo Item not found")]
    NotFound,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid allowed origin {origin:?}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },
}
