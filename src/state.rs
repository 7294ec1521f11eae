use std::sync::Arc;

use sqlx::PgPool;

use cookbook_config::{CorsConfig, JwtConfig};
use cookbook_db::init_db_pool;

use crate::modules::users::{PgUserDirectory, UserDirectory};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// Where the token gate resolves the user behind a token.
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            users: Arc::new(PgUserDirectory::new(db.clone())),
            db,
            jwt_config,
            cors_config,
        }
    }

    pub fn with_user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = users;
        self
    }
}

pub async fn init_app_state() -> AppState {
    AppState::new(
        init_db_pool().await,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    )
}
