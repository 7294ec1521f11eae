//! Application error type and its HTTP rendering.
//!
//! Every failure that crosses a middleware or service boundary is converted
//! into an [`AppError`]. Handlers return `Result<T, AppError>` and axum turns
//! the error into a JSON body of the shape:
//!
//! ```json
//! { "status": 404, "success": false, "message": "Recipe not found" }
//! ```
//!
//! Storage failures are logged and then replaced by one of two fixed
//! messages (see [`ResourceFailure`]) so that driver details never reach the
//! caller.

use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Message returned when a write against the store fails.
pub const RESOURCE_PROBLEM_MESSAGE: &str =
    "There was a problem with the resource, please try again later";

/// Message returned when a read against the store fails.
pub const RESOURCE_ISSUE_MESSAGE: &str =
    "There was an issue with the resource, please try again later";

/// Which of the two generic storage messages to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFailure {
    /// Inserts, updates and deletes.
    Problem,
    /// Selects and counts.
    Issue,
}

impl ResourceFailure {
    pub fn message(self) -> &'static str {
        match self {
            ResourceFailure::Problem => RESOURCE_PROBLEM_MESSAGE,
            ResourceFailure::Issue => RESOURCE_ISSUE_MESSAGE,
        }
    }
}

/// Application-wide error type.
///
/// Each variant maps onto exactly one HTTP status:
///
/// - `Validation` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `Forbidden` → 403 Forbidden
/// - `NotFound` → 404 Not Found
/// - `Resource` → 500 Internal Server Error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing caller input.
    #[error("{0}")]
    Validation(String),

    /// Missing, expired or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed.
    #[error("{0}")]
    Forbidden(String),

    /// Empty result for a lookup by id.
    #[error("{0}")]
    NotFound(String),

    /// The store failed; the detail has already been logged.
    #[error("{}", .0.message())]
    Resource(ResourceFailure),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Logs `err` and replaces it with the "problem" message.
    pub fn problem<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err: anyhow::Error = err.into();
        error!(error = ?err, "Resource write failed");
        Self::Resource(ResourceFailure::Problem)
    }

    /// Logs `err` and replaces it with the "issue" message.
    pub fn issue<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err: anyhow::Error = err.into();
        error!(error = ?err, "Resource read failed");
        Self::Resource(ResourceFailure::Issue)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Resource(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status().as_u16(),
            success: false,
            message: self.to_string(),
        }
    }
}

/// JSON body for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Shorthand for logging a failure with context before laundering it.
pub trait ResultExt<T> {
    /// Maps the error to [`AppError::problem`] after attaching `context`.
    fn or_problem<C>(self, context: C) -> Result<T, AppError>
    where
        C: Display + Send + Sync + 'static;

    /// Maps the error to [`AppError::issue`] after attaching `context`.
    fn or_issue<C>(self, context: C) -> Result<T, AppError>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn or_problem<C>(self, context: C) -> Result<T, AppError>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| {
            let err: anyhow::Error = e.into();
            AppError::problem(err.context(context))
        })
    }

    fn or_issue<C>(self, context: C) -> Result<T, AppError>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| {
            let err: anyhow::Error = e.into();
            AppError::issue(err.context(context))
        })
    }
}
