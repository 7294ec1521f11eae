//! Ingredients belong to exactly one recipe.

use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use cookbook_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ingredient {
    pub id: i64,
    pub recipe_id: i64,
    pub name: String,
    #[schema(example = 2.5)]
    pub quantity: Option<f64>,
    #[schema(example = "cups")]
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub const COLUMNS: &'static str =
        "id, recipe_id, name, quantity, unit, created_at, updated_at";

    pub const LISTING: Listing = Listing {
        table: "ingredients",
        columns: Self::COLUMNS,
        sortable: &["id", "recipe_id", "name", "quantity", "created_at", "updated_at"],
        filterable: &["id", "recipe_id", "name", "unit"],
        default_sort: "created_at",
    };
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientDto {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub recipe_id: i64,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    #[schema(example = "Plain flour")]
    pub name: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: Option<f64>,
    #[validate(length(max = 50))]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientDto {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub recipe_id: Option<i64>,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: Option<f64>,
    #[validate(length(max = 50))]
    pub unit: Option<String>,
}

impl UpdateIngredientDto {
    pub fn has_changes(&self) -> bool {
        self.recipe_id.is_some()
            || self.name.is_some()
            || self.quantity.is_some()
            || self.unit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ingredient_validation() {
        let valid = CreateIngredientDto {
            recipe_id: 3,
            name: "Eggs".into(),
            quantity: Some(6.0),
            unit: None,
        };
        assert!(valid.validate().is_ok());

        let orphan = CreateIngredientDto {
            recipe_id: 0,
            ..valid.clone()
        };
        assert!(orphan.validate().is_err());

        let negative = CreateIngredientDto {
            quantity: Some(-1.0),
            ..valid
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_update_ingredient_has_changes() {
        assert!(!UpdateIngredientDto::default().has_changes());
        assert!(
            UpdateIngredientDto {
                unit: Some("g".into()),
                ..Default::default()
            }
            .has_changes()
        );
    }
}
