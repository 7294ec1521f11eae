//! Many-to-many join rows.
//!
//! The three join tables share one shape (`id`, two parent ids, timestamps)
//! and one set of operations. [`Link`] describes a table so a single service
//! can serve all of them.

use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgRow;
use utoipa::ToSchema;
use validator::Validate;

/// One parent column of a join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSide {
    pub column: &'static str,
    /// Used in messages, e.g. "cookbook".
    pub label: &'static str,
}

pub trait Link: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    type Create: DeserializeOwned + Validate + Send;
    type Update: DeserializeOwned + Validate + Send;

    const TABLE: &'static str;
    /// Singular, human name of the row, e.g. "Cookbook category".
    const LABEL: &'static str;
    const LEFT: LinkSide;
    const RIGHT: LinkSide;
    const LISTING: Listing;

    fn create_pair(dto: &Self::Create) -> (i64, i64);
    fn update_pair(dto: &Self::Update) -> (Option<i64>, Option<i64>);
}

macro_rules! link_table {
    (
        $(#[$meta:meta])*
        $row:ident, $create:ident, $update:ident,
        table = $table:literal,
        label = $label:literal,
        left = ($left:ident, $left_label:literal),
        right = ($right:ident, $right_label:literal) $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
        pub struct $row {
            pub id: i64,
            pub $left: i64,
            pub $right: i64,
            pub created_at: DateTime<Utc>,
            pub updated_at: DateTime<Utc>,
        }

        #[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
        pub struct $create {
            #[validate(range(min = 1, message = "must be a positive id"))]
            pub $left: i64,
            #[validate(range(min = 1, message = "must be a positive id"))]
            pub $right: i64,
        }

        #[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
        pub struct $update {
            #[validate(range(min = 1, message = "must be a positive id"))]
            pub $left: Option<i64>,
            #[validate(range(min = 1, message = "must be a positive id"))]
            pub $right: Option<i64>,
        }

        impl Link for $row {
            type Create = $create;
            type Update = $update;

            const TABLE: &'static str = $table;
            const LABEL: &'static str = $label;
            const LEFT: LinkSide = LinkSide {
                column: stringify!($left),
                label: $left_label,
            };
            const RIGHT: LinkSide = LinkSide {
                column: stringify!($right),
                label: $right_label,
            };
            const LISTING: Listing = Listing {
                table: $table,
                columns: concat!(
                    "id, ",
                    stringify!($left),
                    ", ",
                    stringify!($right),
                    ", created_at, updated_at"
                ),
                sortable: &[
                    "id",
                    stringify!($left),
                    stringify!($right),
                    "created_at",
                    "updated_at",
                ],
                filterable: &["id", stringify!($left), stringify!($right)],
                default_sort: "created_at",
            };

            fn create_pair(dto: &Self::Create) -> (i64, i64) {
                (dto.$left, dto.$right)
            }

            fn update_pair(dto: &Self::Update) -> (Option<i64>, Option<i64>) {
                (dto.$left, dto.$right)
            }
        }
    };
}

link_table! {
    /// Files a cookbook under a category.
    CookbookCategory, CreateCookbookCategoryDto, UpdateCookbookCategoryDto,
    table = "cookbook_categories",
    label = "Cookbook category",
    left = (cookbook_id, "cookbook"),
    right = (category_id, "category"),
}

link_table! {
    /// Places a recipe in a cookbook.
    CookbookRecipe, CreateCookbookRecipeDto, UpdateCookbookRecipeDto,
    table = "cookbook_recipes",
    label = "Cookbook recipe",
    left = (cookbook_id, "cookbook"),
    right = (recipe_id, "recipe"),
}

link_table! {
    /// Tags a recipe with a category.
    RecipeCategory, CreateRecipeCategoryDto, UpdateRecipeCategoryDto,
    table = "recipe_categories",
    label = "Recipe category",
    left = (recipe_id, "recipe"),
    right = (category_id, "category"),
}
