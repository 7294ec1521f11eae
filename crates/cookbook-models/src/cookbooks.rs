//! Cookbooks: named collections of recipes owned by a user.

use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use cookbook_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cookbook {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cookbook {
    pub const COLUMNS: &'static str = "id, user_id, name, description, created_at, updated_at";

    pub const LISTING: Listing = Listing {
        table: "cookbooks",
        columns: Self::COLUMNS,
        sortable: &["id", "user_id", "name", "created_at", "updated_at"],
        filterable: &["id", "user_id", "name"],
        default_sort: "created_at",
    };
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCookbookDto {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    #[schema(example = "Weeknight Dinners")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCookbookDto {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCookbookDto {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.description.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cookbook_validation() {
        let valid = CreateCookbookDto {
            name: "Weeknight Dinners".into(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let blank = CreateCookbookDto {
            name: "".into(),
            description: Some("empty".into()),
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_update_cookbook_validation() {
        let empty = UpdateCookbookDto::default();
        assert!(empty.validate().is_ok());
        assert!(!empty.has_changes());

        let blank_name = UpdateCookbookDto {
            name: Some(" ".into()),
            description: None,
        };
        assert!(blank_name.validate().is_err());
    }
}
