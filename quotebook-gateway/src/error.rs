//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quotebook_core::{Category, CoreError};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A required body field is missing or empty, or the body could not be
    /// decoded at all.
    #[error("Invalid or insufficient user input. Category, quote, and author are required in the request body.")]
    InvalidInput { reason: String },

    /// A quote was requested from a category outside the fixed set.
    #[error("no category listed for '{0}'")]
    UnknownCategory(String),

    /// A quote was submitted to a category outside the fixed set.
    #[error("Category \"{0}\" not listed for new quote.")]
    CategoryNotFound(String),

    /// The category exists but has nothing to pick from.
    #[error("no quotes available in '{0}'")]
    EmptyCategory(Category),

    /// The exact quote/author pair already exists in the category.
    #[error("This exact quote already exists in the category.")]
    DuplicateQuote { category: Category },

    /// A geometry path parameter is not a number.
    #[error("Invalid {param} value '{value}' provided. It must be a number.")]
    InvalidNumeric { param: String, value: String },

    /// Fallback for `CoreError` variants added after this mapping was written;
    /// `CoreError` is `#[non_exhaustive]` and nothing produces this today.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Map a core error raised while submitting a quote.
    ///
    /// Identical to the [`From`] conversion except that an unknown category
    /// is reported as not found rather than as a bad request.
    #[must_use]
    pub fn on_write(err: CoreError) -> Self {
        match err {
            CoreError::UnknownCategory { name } => GatewayError::CategoryNotFound(name),
            other => other.into(),
        }
    }

    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidInput { .. }
            | GatewayError::UnknownCategory(_)
            | GatewayError::InvalidNumeric { .. } => StatusCode::BAD_REQUEST,
            GatewayError::CategoryNotFound(_) | GatewayError::EmptyCategory(_) => {
                StatusCode::NOT_FOUND
            }
            GatewayError::DuplicateQuote { .. } => StatusCode::CONFLICT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput { field } => {
                GatewayError::InvalidInput { reason: format!("missing or empty field '{field}'") }
            }
            CoreError::UnknownCategory { name } => GatewayError::UnknownCategory(name),
            CoreError::EmptyCategory { category } => GatewayError::EmptyCategory(category),
            CoreError::DuplicateQuote { category, .. } => GatewayError::DuplicateQuote { category },
            CoreError::InvalidNumeric { param, value } => {
                GatewayError::InvalidNumeric { param, value }
            }
            // `CoreError` is non-exhaustive.
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            GatewayError::InvalidInput { reason } => {
                tracing::warn!(status = %status, reason = %reason, "request rejected");
            }
            GatewayError::Internal(msg) => tracing::error!(error = %msg, "request failed"),
            other => tracing::warn!(status = %status, error = %other, "request rejected"),
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
