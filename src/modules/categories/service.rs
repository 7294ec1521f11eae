use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id,
};
use cookbook_models::{Category, CreateCategoryDto, UpdateCategoryDto};

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

const DUPLICATE_NAME_MESSAGE: &str = "A category with this name already exists";

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(db, dto), fields(db.table = "categories", db.operation = "insert"))]
    pub async fn create(db: &PgPool, dto: CreateCategoryDto) -> Result<Category, AppError> {
        let sql = format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING {}",
            Category::COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(dto.name.trim())
            .bind(dto.description)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_NAME_MESSAGE))
    }

    pub async fn list(
        db: &PgPool,
        options: &QueryOptions,
    ) -> Result<Paginated<Category>, AppError> {
        fetch_page(db, &Category::LISTING, options).await
    }

    #[instrument(skip(db), fields(db.table = "categories", db.operation = "select"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Category, AppError> {
        ensure_id(id, "category")?;

        let sql = format!("SELECT {} FROM categories WHERE id = $1", Category::COLUMNS);

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch category")?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    #[instrument(skip(db, dto), fields(db.table = "categories", db.operation = "update"))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        ensure_id(id, "category")?;
        ensure_changes(dto.has_changes())?;

        let sql = format!(
            "UPDATE categories SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            Category::COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .bind(dto.name.map(|n| n.trim().to_string()))
            .bind(dto.description)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_NAME_MESSAGE))?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    #[instrument(skip(db), fields(db.table = "categories", db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        ensure_id(id, "category")?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .or_problem("Failed to delete category")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category not found"));
        }

        Ok(())
    }
}
