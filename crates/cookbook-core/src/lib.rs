//! # Cookbook Core
//!
//! Shared building blocks for the Cookbook API:
//!
//! - [`errors`]: the application error type and its JSON rendering
//! - [`pagination`]: normalization of `page`, `limit`, sort and filter parameters
//! - [`listing`]: column whitelists for list queries
//! - [`validation`]: primitive input checks
//! - [`password`]: bcrypt hashing and verification

pub mod errors;
pub mod listing;
pub mod pagination;
pub mod password;
pub mod validation;

pub use errors::{AppError, ResultExt};
pub use listing::Listing;
pub use pagination::{ListQuery, Paginated, PaginationMeta, QueryOptions, SortOrder};
pub use password::{hash_password, verify_password};
pub use validation::{ensure_changes, ensure_id};
