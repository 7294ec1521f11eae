//! Shared service for the three join tables.
//!
//! Each join row is a pair of parent ids. [`LinkService`] is generic over
//! [`Link`] so `cookbook_categories`, `cookbook_recipes` and
//! `recipe_categories` share a single set of queries.

use std::marker::PhantomData;

use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::{
    AppError, Paginated, QueryOptions, ResultExt, ensure_changes, ensure_id,
};
use cookbook_models::Link;

use crate::utils::db::map_write_error;
use crate::utils::listing::fetch_page;

pub struct LinkService<L>(PhantomData<L>);

impl<L: Link> LinkService<L> {
    fn not_found() -> AppError {
        AppError::not_found(format!("{} not found", L::LABEL))
    }

    fn duplicate_message() -> String {
        format!("{} already exists", L::LABEL)
    }

    fn ensure_link_id(id: i64) -> Result<i64, AppError> {
        ensure_id(id, &L::LABEL.to_lowercase())
    }

    #[instrument(skip(db, dto), fields(db.table = L::TABLE, db.operation = "insert"))]
    pub async fn create(db: &PgPool, dto: L::Create) -> Result<L, AppError> {
        let (left, right) = L::create_pair(&dto);
        ensure_id(left, L::LEFT.label)?;
        ensure_id(right, L::RIGHT.label)?;

        let sql = format!(
            "INSERT INTO {table} ({left}, {right}) VALUES ($1, $2) RETURNING {columns}",
            table = L::TABLE,
            left = L::LEFT.column,
            right = L::RIGHT.column,
            columns = L::LISTING.columns,
        );

        sqlx::query_as::<_, L>(&sql)
            .bind(left)
            .bind(right)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, &Self::duplicate_message()))
    }

    pub async fn list(db: &PgPool, options: &QueryOptions) -> Result<Paginated<L>, AppError> {
        fetch_page(db, &L::LISTING, options).await
    }

    #[instrument(skip(db), fields(db.table = L::TABLE, db.operation = "select"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<L, AppError> {
        Self::ensure_link_id(id)?;

        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            L::LISTING.columns,
            L::TABLE
        );

        sqlx::query_as::<_, L>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .or_issue(format!("Failed to fetch {}", L::TABLE))?
            .ok_or_else(Self::not_found)
    }

    /// Moves either end of the link; omitted ends keep their value.
    #[instrument(skip(db, dto), fields(db.table = L::TABLE, db.operation = "update"))]
    pub async fn update(db: &PgPool, id: i64, dto: L::Update) -> Result<L, AppError> {
        Self::ensure_link_id(id)?;
        let (left, right) = L::update_pair(&dto);
        ensure_changes(left.is_some() || right.is_some())?;
        if let Some(left) = left {
            ensure_id(left, L::LEFT.label)?;
        }
        if let Some(right) = right {
            ensure_id(right, L::RIGHT.label)?;
        }

        let sql = format!(
            "UPDATE {table} SET \
                {left} = COALESCE($2, {left}), \
                {right} = COALESCE($3, {right}), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {columns}",
            table = L::TABLE,
            left = L::LEFT.column,
            right = L::RIGHT.column,
            columns = L::LISTING.columns,
        );

        sqlx::query_as::<_, L>(&sql)
            .bind(id)
            .bind(left)
            .bind(right)
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, &Self::duplicate_message()))?
            .ok_or_else(Self::not_found)
    }

    #[instrument(skip(db), fields(db.table = L::TABLE, db.operation = "delete"))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        Self::ensure_link_id(id)?;

        let sql = format!("DELETE FROM {} WHERE id = $1", L::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(db)
            .await
            .or_problem(format!("Failed to delete from {}", L::TABLE))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_models::{CookbookCategory, CookbookRecipe, RecipeCategory};

    #[test]
    fn test_link_messages() {
        assert_eq!(
            LinkService::<CookbookRecipe>::not_found().to_string(),
            "Cookbook recipe not found"
        );
        assert_eq!(
            LinkService::<RecipeCategory>::duplicate_message(),
            "Recipe category already exists"
        );
    }

    #[test]
    fn test_link_id_uses_lowercase_label() {
        let err = LinkService::<CookbookCategory>::ensure_link_id(0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid cookbook category id");
        assert_eq!(LinkService::<CookbookCategory>::ensure_link_id(3), Ok(3));
    }
}
