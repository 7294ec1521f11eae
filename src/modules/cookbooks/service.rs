use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id,
};
use cookbook_models::{Cookbook, CreateCookbookDto, UpdateCookbookDto};

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

pub struct CookbookService;

impl CookbookService {
    #[instrument(skip(db, dto), fields(db.table = "cookbooks", db.operation = "insert"))]
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        dto: CreateCookbookDto,
    ) -> Result<Cookbook, AppError> {
        ensure_id(user_id, "user")?;

        let sql = format!(
            "INSERT INTO cookbooks (user_id, name, description) VALUES ($1, $2, $3) RETURNING {}",
            Cookbook::COLUMNS
        );

        sqlx::query_as::<_, Cookbook>(&sql)
            .bind(user_id)
            .bind(dto.name.trim())
            .bind(dto.description)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, "Cookbook already exists"))
    }

    pub async fn list(
        db: &PgPool,
        options: &QueryOptions,
    ) -> Result<Paginated<Cookbook>, AppError> {
        fetch_page(db, &Cookbook::LISTING, options).await
    }

    #[instrument(skip(db), fields(db.table = "cookbooks", db.operation = "select"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Cookbook, AppError> {
        ensure_id(id, "cookbook")?;

        let sql = format!("SELECT {} FROM cookbooks WHERE id = $1", Cookbook::COLUMNS);

        sqlx::query_as::<_, Cookbook>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch cookbook")?
            .ok_or_else(|| AppError::not_found("Cookbook not found"))
    }

    #[instrument(skip(db, dto), fields(db.table = "cookbooks", db.operation = "update"))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        dto: UpdateCookbookDto,
    ) -> Result<Cookbook, AppError> {
        ensure_id(id, "cookbook")?;
        ensure_changes(dto.has_changes())?;

        let sql = format!(
            "UPDATE cookbooks SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            Cookbook::COLUMNS
        );

        sqlx::query_as::<_, Cookbook>(&sql)
            .bind(id)
            .bind(dto.name.map(|n| n.trim().to_string()))
            .bind(dto.description)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, "Cookbook already exists"))?
            .ok_or_else(|| AppError::not_found("Cookbook not found"))
    }

    #[instrument(skip(db), fields(db.table = "cookbooks", db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        ensure_id(id, "cookbook")?;

        let result = sqlx::query("DELETE FROM cookbooks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .or_problem("Failed to delete cookbook")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Cookbook not found"));
        }

        Ok(())
    }
}
