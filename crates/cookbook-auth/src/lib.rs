//! # Cookbook Auth
//!
//! Access token claims plus the functions that sign and verify them.
//!
//! ```ignore
//! use cookbook_auth::{create_access_token, verify_token};
//! use cookbook_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user.id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id(), user.id);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, SubjectRef, TokenSubject};
pub use jwt::{TokenError, create_access_token, sign_claims, verify_token};
