//! # Cookbook CLI
//!
//! Administration and seeding utilities for the Cookbook API.
//!
//! ```ignore
//! use cookbook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20); // 20 users with default catalogue sizes
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
