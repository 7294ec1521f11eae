use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use cookbook_core::listing::ListPlan;
use cookbook_core::{AppError, Listing, Paginated, PaginationMeta, QueryOptions, ResultExt};

/// Runs the count and page queries for one [`Listing`].
///
/// ```sql
/// SELECT COUNT(*) FROM <table> [WHERE <col>::text = ANY($1)];
/// SELECT <columns> FROM <table> [WHERE ...]
///   ORDER BY <col> <dir>, id ASC LIMIT $n OFFSET $m;
/// ```
#[instrument(skip(db, listing), fields(db.table = listing.table, db.operation = "select"))]
pub async fn fetch_page<T>(
    db: &PgPool,
    listing: &Listing,
    options: &QueryOptions,
) -> Result<Paginated<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let plan = listing.plan(options)?;

    let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
    count.push(listing.table);
    push_filter(&mut count, &plan);

    let total: i64 = count
        .build_query_scalar::<i64>()
        .fetch_one(db)
        .await
        .or_issue(format!("Failed to count {}", listing.table))?;

    let mut page = QueryBuilder::<Postgres>::new("SELECT ");
    page.push(listing.columns)
        .push(" FROM ")
        .push(listing.table);
    push_filter(&mut page, &plan);
    page.push(" ORDER BY ")
        .push(plan.sort_column)
        .push(" ")
        .push(plan.order.as_sql())
        .push(", id ASC LIMIT ")
        .push_bind(options.limit)
        .push(" OFFSET ")
        .push_bind(options.offset);

    let data = page
        .build_query_as::<T>()
        .fetch_all(db)
        .await
        .or_issue(format!("Failed to list {}", listing.table))?;

    Ok(Paginated {
        data,
        meta: PaginationMeta::new(total, options),
    })
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, plan: &ListPlan) {
    if let Some(filter) = &plan.filter {
        builder
            .push(" WHERE ")
            .push(filter.column)
            .push("::text = ANY(")
            .push_bind(filter.values.clone())
            .push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::ListQuery;

    const WIDGETS: Listing = Listing {
        table: "widgets",
        columns: "id, name",
        sortable: &["id", "name"],
        filterable: &["name"],
        default_sort: "id",
    };

    #[test]
    fn test_filter_clause() {
        let options = QueryOptions::from_query(&ListQuery {
            filter_by: Some("name".into()),
            filter_values: Some("a,b".into()),
            ..Default::default()
        });
        let plan = WIDGETS.plan(&options).unwrap();

        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM widgets");
        push_filter(&mut builder, &plan);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM widgets WHERE name::text = ANY($1)"
        );
    }

    #[test]
    fn test_no_filter_clause() {
        let plan = WIDGETS.plan(&QueryOptions::default()).unwrap();
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM widgets");
        push_filter(&mut builder, &plan);
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM widgets");
    }
}
