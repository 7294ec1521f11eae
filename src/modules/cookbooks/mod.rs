pub mod controller;
pub mod router;
pub mod service;

pub use router::init_cookbooks_router;
pub use service::CookbookService;
