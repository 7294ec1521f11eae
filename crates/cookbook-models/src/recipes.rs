//! Recipes.

use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use cookbook_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recipe {
    pub id: i64,
    /// Author of the recipe
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub const COLUMNS: &'static str = "id, user_id, title, description, instructions, servings, \
         prep_time_minutes, cook_time_minutes, created_at, updated_at";

    pub const LISTING: Listing = Listing {
        table: "recipes",
        columns: Self::COLUMNS,
        sortable: &[
            "id",
            "user_id",
            "title",
            "servings",
            "prep_time_minutes",
            "cook_time_minutes",
            "created_at",
            "updated_at",
        ],
        filterable: &["id", "user_id", "title", "servings"],
        default_sort: "created_at",
    };
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeDto {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    #[schema(example = "Shakshuka")]
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub servings: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub prep_time_minutes: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub cook_time_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeDto {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub servings: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub prep_time_minutes: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub cook_time_minutes: Option<i32>,
}

impl UpdateRecipeDto {
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.instructions.is_some()
            || self.servings.is_some()
            || self.prep_time_minutes.is_some()
            || self.cook_time_minutes.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str) -> CreateRecipeDto {
        CreateRecipeDto {
            title: title.into(),
            description: None,
            instructions: Some("Simmer.".into()),
            servings: Some(4),
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(25),
        }
    }

    #[test]
    fn test_create_recipe_validation() {
        assert!(create("Shakshuka").validate().is_ok());
        assert!(create("").validate().is_err());
        assert!(create("   ").validate().is_err());
        assert!(create(&"x".repeat(256)).validate().is_err());

        let zero_servings = CreateRecipeDto {
            servings: Some(0),
            ..create("Soup")
        };
        assert!(zero_servings.validate().is_err());

        let negative_time = CreateRecipeDto {
            cook_time_minutes: Some(-5),
            ..create("Soup")
        };
        assert!(negative_time.validate().is_err());
    }

    #[test]
    fn test_update_recipe_has_changes() {
        assert!(!UpdateRecipeDto::default().has_changes());
        assert!(
            UpdateRecipeDto {
                servings: Some(2),
                ..Default::default()
            }
            .has_changes()
        );
    }

    #[test]
    fn test_listing_columns_are_selected() {
        for column in Recipe::LISTING.sortable {
            assert!(Recipe::COLUMNS.contains(column), "{column}");
        }
    }
}
