//! Error taxonomy for the site.
//!
//! Request-time failures are either a clean 404 (the visitor asked for a
//! locale we do not serve) or a loud 500 (the site is misconfigured).
//! Startup validation errors share the same type so `main` can report them
//! before the listener is bound.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Unsupported locale: '{0}'")]
    InvalidLocale(String),

    #[error("Route for page '{page}' has no entry in the page registry")]
    ConfigurationMismatch { page: String },

    #[error("Template not found: '{0}'")]
    TemplateMissing(String),

    #[error("Invalid route '{path}': {reason}")]
    InvalidRoute { path: String, reason: String },

    #[error("Invalid metadata for page '{key}': {reason}")]
    InvalidPageMeta { key: String, reason: String },

    #[error("Default locale '{0}' is not a supported locale")]
    UnknownDefaultLocale(String),

    #[error("Failed to serialize structured data")]
    StructuredData(#[from] serde_json::Error),
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::InvalidLocale(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
            return (status, "Internal Server Error").into_response();
        }
        (status, "Not Found").into_response()
    }
}
