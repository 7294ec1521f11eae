use std::fmt::Debug;

use async_trait::async_trait;
use sqlx::PgPool;

use cookbook_core::AppError;
use cookbook_models::User;

use super::service::UserService;

/// Resolves the user named by a verified token.
#[async_trait]
pub trait UserDirectory: Debug + Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<User>, AppError>;
}

/// Looks users up in the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    db: PgPool,
}

impl PgUserDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find(&self, id: i64) -> Result<Option<User>, AppError> {
        UserService::find_optional(&self.db, id).await
    }
}
