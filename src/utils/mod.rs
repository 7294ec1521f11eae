//! Shared helpers for services and controllers.
//!
//! - [`db`]: mapping of constraint violations to caller errors
//! - [`listing`]: paginated, sorted and filtered `SELECT`s
//! - [`path`]: numeric id path extractor

pub mod db;
pub mod listing;
pub mod path;
