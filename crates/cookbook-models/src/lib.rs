//! # Cookbook Models
//!
//! Database rows, request DTOs and response bodies for the Cookbook API.
//!
//! # Modules
//!
//! - [`users`]: accounts and their roles
//! - [`auth`]: registration and login bodies
//! - [`recipes`], [`cookbooks`], [`categories`], [`ingredients`]: the catalogue
//! - [`links`]: the three many-to-many join tables
//!
//! Every listable row type carries a `LISTING` constant describing which
//! columns callers may sort and filter on.

pub mod auth;
pub mod categories;
pub mod cookbooks;
pub mod ingredients;
pub mod links;
pub mod recipes;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use categories::{Category, CreateCategoryDto, UpdateCategoryDto};
pub use cookbooks::{Cookbook, CreateCookbookDto, UpdateCookbookDto};
pub use ingredients::{CreateIngredientDto, Ingredient, UpdateIngredientDto};
pub use links::{
    CookbookCategory, CookbookRecipe, CreateCookbookCategoryDto, CreateCookbookRecipeDto,
    CreateRecipeCategoryDto, Link, LinkSide, RecipeCategory, UpdateCookbookCategoryDto,
    UpdateCookbookRecipeDto, UpdateRecipeCategoryDto,
};
pub use recipes::{CreateRecipeDto, Recipe, UpdateRecipeDto};
pub use users::{UpdateUserDto, User, UserWithPassword, roles};
