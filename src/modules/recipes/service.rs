use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id,
};
use cookbook_models::{CreateRecipeDto, Recipe, UpdateRecipeDto};

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

pub struct RecipeService;

impl RecipeService {
    #[instrument(skip(db, dto), fields(db.table = "recipes", db.operation = "insert"))]
    pub async fn create(db: &PgPool, user_id: i64, dto: CreateRecipeDto) -> Result<Recipe, AppError> {
        ensure_id(user_id, "user")?;

        let sql = format!(
            "INSERT INTO recipes \
                (user_id, title, description, instructions, servings, prep_time_minutes, cook_time_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            Recipe::COLUMNS
        );

        sqlx::query_as::<_, Recipe>(&sql)
            .bind(user_id)
            .bind(dto.title.trim())
            .bind(dto.description)
            .bind(dto.instructions)
            .bind(dto.servings)
            .bind(dto.prep_time_minutes)
            .bind(dto.cook_time_minutes)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, "Recipe already exists"))
    }

    pub async fn list(db: &PgPool, options: &QueryOptions) -> Result<Paginated<Recipe>, AppError> {
        fetch_page(db, &Recipe::LISTING, options).await
    }

    #[instrument(skip(db), fields(db.table = "recipes", db.operation = "select"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Recipe, AppError> {
        ensure_id(id, "recipe")?;

        let sql = format!("SELECT {} FROM recipes WHERE id = $1", Recipe::COLUMNS);

        sqlx::query_as::<_, Recipe>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch recipe")?
            .ok_or_else(|| AppError::not_found("Recipe not found"))
    }

    #[instrument(skip(db, dto), fields(db.table = "recipes", db.operation = "update"))]
    pub async fn update(db: &PgPool, id: i64, dto: UpdateRecipeDto) -> Result<Recipe, AppError> {
        ensure_id(id, "recipe")?;
        ensure_changes(dto.has_changes())?;

        let sql = format!(
            "UPDATE recipes SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                instructions = COALESCE($4, instructions), \
                servings = COALESCE($5, servings), \
                prep_time_minutes = COALESCE($6, prep_time_minutes), \
                cook_time_minutes = COALESCE($7, cook_time_minutes), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            Recipe::COLUMNS
        );

        sqlx::query_as::<_, Recipe>(&sql)
            .bind(id)
            .bind(dto.title.map(|t| t.trim().to_string()))
            .bind(dto.description)
            .bind(dto.instructions)
            .bind(dto.servings)
            .bind(dto.prep_time_minutes)
            .bind(dto.cook_time_minutes)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, "Recipe already exists"))?
            .ok_or_else(|| AppError::not_found("Recipe not found"))
    }

    #[instrument(skip(db), fields(db.table = "recipes", db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        ensure_id(id, "recipe")?;

        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .or_problem("Failed to delete recipe")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Recipe not found"));
        }

        Ok(())
    }
}
