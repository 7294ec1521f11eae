pub mod controller;
pub mod router;

pub use router::init_recipe_categories_router;
