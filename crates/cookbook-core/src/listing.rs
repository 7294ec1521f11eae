//! Whitelisted sorting and filtering for list queries.
//!
//! A [`Listing`] names the only columns a caller may sort or filter on for
//! one table. [`Listing::plan`] checks a [`QueryOptions`] against it and
//! hands back `'static` column names, so nothing the caller typed is ever
//! spliced into SQL.

use crate::errors::AppError;
use crate::pagination::{QueryOptions, SortOrder};

#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub table: &'static str,
    /// Comma separated select list.
    pub columns: &'static str,
    pub sortable: &'static [&'static str],
    pub filterable: &'static [&'static str],
    /// Used when the caller gives no `sort_by`; always descending.
    pub default_sort: &'static str,
}

/// A validated sort and filter for one [`Listing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlan {
    pub sort_column: &'static str,
    pub order: SortOrder,
    pub filter: Option<FilterPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub column: &'static str,
    pub values: Vec<String>,
}

impl Listing {
    pub fn plan(&self, options: &QueryOptions) -> Result<ListPlan, AppError> {
        let (sort_column, order) = match &options.sort {
            Some(sort) => (self.sort_column(&sort.by)?, sort.order),
            None => (self.default_sort, SortOrder::Desc),
        };

        let filter = match &options.filter {
            Some(filter) => Some(FilterPlan {
                column: self.filter_column(&filter.by)?,
                values: filter.values(),
            }),
            None => None,
        };

        Ok(ListPlan {
            sort_column,
            order,
            filter,
        })
    }

    pub fn sort_column(&self, requested: &str) -> Result<&'static str, AppError> {
        lookup(self.sortable, requested)
            .ok_or_else(|| AppError::validation(format!("Cannot sort by '{requested}'")))
    }

    pub fn filter_column(&self, requested: &str) -> Result<&'static str, AppError> {
        lookup(self.filterable, requested)
            .ok_or_else(|| AppError::validation(format!("Cannot filter by '{requested}'")))
    }
}

fn lookup(allowed: &'static [&'static str], requested: &str) -> Option<&'static str> {
    allowed.iter().copied().find(|column| *column == requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::ListQuery;

    const RECIPES: Listing = Listing {
        table: "recipes",
        columns: "id, title",
        sortable: &["id", "title", "created_at"],
        filterable: &["id", "user_id"],
        default_sort: "created_at",
    };

    fn options(query: ListQuery) -> QueryOptions {
        QueryOptions::from_query(&query)
    }

    #[test]
    fn test_default_plan() {
        let plan = RECIPES.plan(&QueryOptions::default()).unwrap();
        assert_eq!(plan.sort_column, "created_at");
        assert_eq!(plan.order, SortOrder::Desc);
        assert!(plan.filter.is_none());
    }

    #[test]
    fn test_whitelisted_sort_and_filter() {
        let plan = RECIPES
            .plan(&options(ListQuery {
                sort_by: Some("title".into()),
                sort_direction: Some("asc".into()),
                filter_by: Some("user_id".into()),
                filter_values: Some("3,4".into()),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(plan.sort_column, "title");
        assert_eq!(plan.order, SortOrder::Asc);
        assert_eq!(
            plan.filter,
            Some(FilterPlan {
                column: "user_id",
                values: vec!["3".into(), "4".into()],
            })
        );
    }

    #[test]
    fn test_unknown_sort_column_is_rejected() {
        let err = RECIPES
            .plan(&options(ListQuery {
                sort_by: Some("title; DROP TABLE recipes".into()),
                ..Default::default()
            }))
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_filter_column_is_rejected() {
        let err = RECIPES
            .plan(&options(ListQuery {
                filter_by: Some("password".into()),
                filter_values: Some("x".into()),
                ..Default::default()
            }))
            .unwrap_err();
        assert_eq!(err, AppError::validation("Cannot filter by 'password'"));
    }
}
