pub mod controller;
pub mod router;

pub use router::init_cookbook_categories_router;
