use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id,
};
use cookbook_models::{CreateIngredientDto, Ingredient, UpdateIngredientDto};

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

pub struct IngredientService;

impl IngredientService {
    /// Adds an ingredient to an existing recipe.
    #[instrument(skip(db, dto), fields(db.table = "ingredients", db.operation = "insert", recipe_id = dto.recipe_id))]
    pub async fn create(db: &PgPool, dto: CreateIngredientDto) -> Result<Ingredient, AppError> {
        ensure_id(dto.recipe_id, "recipe")?;

        let sql = format!(
            "INSERT INTO ingredients (recipe_id, name, quantity, unit) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            Ingredient::COLUMNS
        );

        sqlx::query_as::<_, Ingredient>(&sql)
            .bind(dto.recipe_id)
            .bind(dto.name.trim())
            .bind(dto.quantity)
            .bind(dto.unit)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, "Ingredient already exists"))
    }

    pub async fn list(
        db: &PgPool,
        options: &QueryOptions,
    ) -> Result<Paginated<Ingredient>, AppError> {
        fetch_page(db, &Ingredient::LISTING, options).await
    }

    #[instrument(skip(db), fields(db.table = "ingredients", db.operation = "select"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Ingredient, AppError> {
        ensure_id(id, "ingredient")?;

        let sql = format!(
            "SELECT {} FROM ingredients WHERE id = $1",
            Ingredient::COLUMNS
        );

        sqlx::query_as::<_, Ingredient>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue("Failed to fetch ingredient")?
            .ok_or_else(|| AppError::not_found("Ingredient not found"))
    }

    #[instrument(skip(db, dto), fields(db.table = "ingredients", db.operation = "update"))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        dto: UpdateIngredientDto,
    ) -> Result<Ingredient, AppError> {
        ensure_id(id, "ingredient")?;
        ensure_changes(dto.has_changes())?;

        let sql = format!(
            "UPDATE ingredients SET \
                recipe_id = COALESCE($2, recipe_id), \
                name = COALESCE($3, name), \
                quantity = COALESCE($4, quantity), \
                unit = COALESCE($5, unit), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            Ingredient::COLUMNS
        );

        sqlx::query_as::<_, Ingredient>(&sql)
            .bind(id)
            .bind(dto.recipe_id)
            .bind(dto.name.map(|n| n.trim().to_string()))
            .bind(dto.quantity)
            .bind(dto.unit)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, "Ingredient already exists"))?
            .ok_or_else(|| AppError::not_found("Ingredient not found"))
    }

    #[instrument(skip(db), fields(db.table = "ingredients", db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        ensure_id(id, "ingredient")?;

        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .or_problem("Failed to delete ingredient")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Ingredient not found"));
        }

        Ok(())
    }
}
