use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use cookbook_auth::{TokenError, verify_token};
use cookbook_core::AppError;
use cookbook_models::User;

use crate::state::AppState;

pub const MISSING_TOKEN_MESSAGE: &str =
    "You are not authorized to access this resource, please login";
pub const EXPIRED_TOKEN_MESSAGE: &str = "Your access token has expired, please login";
pub const UNKNOWN_USER_MESSAGE: &str = "No user found matching supplied id, please login";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Must be logged in to access the specified route";

/// The user resolved by [`authenticate`] for this request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(LOGIN_REQUIRED_MESSAGE))
    }
}

/// Returns the token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

pub fn token_error_to_app_error(err: TokenError) -> AppError {
    match err {
        TokenError::Expired => AppError::unauthorized(EXPIRED_TOKEN_MESSAGE),
        TokenError::Invalid(description) => AppError::unauthorized(description),
    }
}

/// Token gate: verifies the bearer token, loads its user and attaches it.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::unauthorized(MISSING_TOKEN_MESSAGE))?;

    let claims = verify_token(token, &state.jwt_config).map_err(token_error_to_app_error)?;
    let user_id = claims.user_id();

    let user = state
        .users
        .find(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(UNKNOWN_USER_MESSAGE))?;

    debug!(user_id, "Authenticated request");
    req.extensions_mut().insert(AuthUser(user));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcg==")), None);
        assert_eq!(bearer_token(&headers("bearer abc")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_token_errors() {
        assert_eq!(
            token_error_to_app_error(TokenError::Expired),
            AppError::unauthorized(EXPIRED_TOKEN_MESSAGE)
        );
        assert_eq!(
            token_error_to_app_error(TokenError::Invalid("InvalidSignature".into())),
            AppError::unauthorized("InvalidSignature")
        );
    }
}
