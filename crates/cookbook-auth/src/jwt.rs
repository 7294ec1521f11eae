//! Signing and verification of access tokens (HS256, `exp` required).

use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use cookbook_config::JwtConfig;
use cookbook_core::{AppError, ResultExt};

use crate::claims::{Claims, TokenSubject};

/// Why a bearer token was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    /// Any other failure, carrying the library's description.
    #[error("{0}")]
    Invalid(String),
}

/// Issues a token whose payload is `{ user: { id }, iat, exp }`.
pub fn create_access_token(user_id: i64, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let exp = now.saturating_add(jwt_config.access_token_expiry.max(0) as usize);

    let claims = Claims {
        subject: TokenSubject::nested(user_id),
        exp,
        iat: now,
    };

    sign_claims(&claims, jwt_config)
}

pub fn sign_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .or_problem("Failed to sign access token")
}

/// Expiry is exact: no leeway is granted past `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(e.to_string()),
    })
}
