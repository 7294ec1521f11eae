use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use cookbook_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub const COLUMNS: &'static str = "id, name, description, created_at, updated_at";

    pub const LISTING: Listing = Listing {
        table: "categories",
        columns: Self::COLUMNS,
        sortable: &["id", "name", "created_at", "updated_at"],
        filterable: &["id", "name"],
        default_sort: "created_at",
    };
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    #[schema(example = "Vegetarian")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCategoryDto {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.description.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_limits() {
        let ok = CreateCategoryDto {
            name: "x".repeat(100),
            description: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCategoryDto {
            name: "x".repeat(101),
            description: None,
        };
        assert!(too_long.validate().is_err());
    }
}
