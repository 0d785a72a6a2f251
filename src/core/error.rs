//! Typed errors for sorting
//!
//! Only the in-memory fallback of
//! [`sort_queryset`](crate::core::queryset::sort_queryset) can fail:
//!
//! - [`SortError::MissingField`]: the specification is a bare `-`
//! - [`SortError::MissingAttribute`]: records do not expose the sort attribute
//!
//! # Example
//!
//! ```rust,ignore
//! match sort_queryset(queryset, &request.order_by()) {
//!     Ok(ordered) => render(ordered.into_records()),
//!     Err(SortError::MissingAttribute { field }) => {
//!         println!("cannot sort on {}", field);
//!     }
//!     Err(e) => return e.into_response(),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while sorting records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Descending marker with no field name after it
    #[error("Invalid sort specification '{order_by}': missing field name")]
    MissingField { order_by: String },

    /// Records do not expose the requested attribute
    #[error("Records have no attribute '{field}' to sort on")]
    MissingAttribute { field: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SortError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SortError::MissingField { .. } => "INVALID_ORDER_BY",
            SortError::MissingAttribute { .. } => "UNKNOWN_SORT_ATTRIBUTE",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: Some(self.details()),
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            SortError::MissingField { order_by } => serde_json::json!({ "order_by": order_by }),
            SortError::MissingAttribute { field } => serde_json::json!({ "field": field }),
        }
    }
}

impl IntoResponse for SortError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
