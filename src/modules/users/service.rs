use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id, hash_password,
};
use cookbook_models::{RegisterRequest, UpdateUserDto, User, UserWithPassword, roles};

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";

pub struct UserService;

impl UserService {
    /// Hashes the password and stores the user with the given roles.
    #[instrument(skip(db, dto), fields(db.table = "users", db.operation = "insert", email = %dto.email))]
    pub async fn create(
        db: &PgPool,
        dto: RegisterRequest,
        user_roles: &[&str],
    ) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;
        let user_roles: Vec<String> = user_roles.iter().map(|r| r.to_string()).collect();

        let sql = format!(
            "INSERT INTO users (email, forename, surname, password, roles) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            User::COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(dto.email.trim().to_lowercase())
            .bind(dto.forename.trim())
            .bind(dto.surname.trim())
            .bind(password_hash)
            .bind(user_roles)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_EMAIL_MESSAGE))
    }

    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        Self::create(db, dto, &[roles::USER]).await
    }

    #[instrument(skip(db), fields(db.table = "users", db.operation = "select"))]
    pub async fn list(db: &PgPool, options: &QueryOptions) -> Result<Paginated<User>, AppError> {
        fetch_page(db, &User::LISTING, options).await
    }

    /// Single lookup used by the token gate; no row is not an error here.
    #[instrument(skip(db), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_optional(db: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", User::COLUMNS);

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch user by id")
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<User, AppError> {
        ensure_id(id, "user")?;
        Self::find_optional(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(db, email), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_with_password(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AppError> {
        let sql = format!(
            "SELECT {}, password FROM users WHERE email = $1",
            User::COLUMNS
        );

        sqlx::query_as::<_, UserWithPassword>(&sql)
            .bind(email.trim().to_lowercase())
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch user by email")
    }

    #[instrument(skip(db, dto), fields(db.table = "users", db.operation = "update"))]
    pub async fn update(db: &PgPool, id: i64, dto: UpdateUserDto) -> Result<User, AppError> {
        ensure_id(id, "user")?;
        ensure_changes(dto.has_changes())?;

        let sql = format!(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                forename = COALESCE($3, forename), \
                surname = COALESCE($4, surname), \
                roles = COALESCE($5, roles), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            User::COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(dto.email.map(|e| e.trim().to_lowercase()))
            .bind(dto.forename.map(|f| f.trim().to_string()))
            .bind(dto.surname.map(|s| s.trim().to_string()))
            .bind(dto.roles)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_EMAIL_MESSAGE))?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(db), fields(db.table = "users", db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        ensure_id(id, "user")?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .or_problem("Failed to delete user")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }
}
