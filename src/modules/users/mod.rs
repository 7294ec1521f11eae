pub mod controller;
pub mod directory;
pub mod router;
pub mod service;

pub use directory::{PgUserDirectory, UserDirectory};
pub use router::init_users_router;
pub use service::UserService;
