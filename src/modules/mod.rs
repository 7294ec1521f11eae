pub mod auth;
pub mod categories;
pub mod cookbook_categories;
pub mod cookbook_recipes;
pub mod cookbooks;
pub mod ingredients;
pub mod links;
pub mod recipe_categories;
pub mod recipes;
pub mod users;
