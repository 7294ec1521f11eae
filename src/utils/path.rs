use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use cookbook_core::AppError;

/// The `{id}` segment of a resource route.
///
/// Non-numeric ids are rejected here; services still apply `ensure_id` for
/// the `< 1` case so the message can name the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| ResourceId(id))
            .map_err(|_| AppError::validation("Invalid id"))
    }
}
