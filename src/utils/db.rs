use cookbook_core::AppError;

/// Maps a failed insert or update.
///
/// Unique violations become a 400 with `duplicate_message`, foreign key
/// violations a 400 naming the missing parent. Everything else is logged
/// and reported as a generic resource problem.
pub fn map_write_error(err: sqlx::Error, duplicate_message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::validation(duplicate_message);
        }
        if db_err.is_foreign_key_violation() {
            let parent = missing_parent(db_err.table(), db_err.constraint());
            return AppError::validation(format!("Referenced {parent} does not exist"));
        }
    }
    AppError::problem(anyhow::Error::from(err).context("Database write failed"))
}

/// Derives `recipe` from a default constraint name such as
/// `ingredients_recipe_id_fkey` on table `ingredients`.
fn missing_parent(table: Option<&str>, constraint: Option<&str>) -> String {
    let column = constraint
        .and_then(|c| c.strip_suffix("_fkey"))
        .map(|c| match table {
            Some(table) => c.strip_prefix(table).and_then(|c| c.strip_prefix('_')).unwrap_or(c),
            None => c,
        });

    match column {
        Some(column) => column.strip_suffix("_id").unwrap_or(column).replace('_', " "),
        None => "record".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parent_from_constraint() {
        assert_eq!(
            missing_parent(Some("ingredients"), Some("ingredients_recipe_id_fkey")),
            "recipe"
        );
        assert_eq!(
            missing_parent(Some("cookbook_recipes"), Some("cookbook_recipes_cookbook_id_fkey")),
            "cookbook"
        );
        assert_eq!(
            missing_parent(None, Some("recipe_categories_category_id_fkey")),
            "recipe categories category"
        );
        assert_eq!(missing_parent(Some("recipes"), None), "record");
    }

    #[test]
    fn test_non_database_errors_are_problems() {
        let err = map_write_error(sqlx::Error::RowNotFound, "Recipe already exists");
        assert_eq!(
            err.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
