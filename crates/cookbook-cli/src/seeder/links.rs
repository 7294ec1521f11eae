//! Join rows between the seeded catalogue entries.

use std::time::Instant;

use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Pairs each left id with `per_left` right ids, walking the right side
/// round-robin from an offset that shifts per left id.
///
/// No pair repeats as long as `per_left <= rights.len()`.
pub fn spread_pairs(lefts: &[i64], rights: &[i64], per_left: usize) -> Vec<(i64, i64)> {
    if rights.is_empty() {
        return Vec::new();
    }
    let per_left = per_left.min(rights.len());

    lefts
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, &left)| {
            (0..per_left).map(move |step| (left, rights[(idx + step) % rights.len()]))
        })
        .collect()
}

/// Inserts pairs into `table`, skipping ones that already exist.
pub async fn insert_pairs(
    db: &PgPool,
    table: &str,
    columns: (&str, &str),
    pairs: &[(i64, i64)],
) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    let mut inserted = 0;
    let mut tx = db.begin().await?;

    for chunk in pairs.chunks(5000) {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "INSERT INTO {table} ({}, {}) ",
            columns.0, columns.1
        ));
        query.push_values(chunk, |mut row, (left, right)| {
            row.push_bind(*left).push_bind(*right);
        });
        query.push(" ON CONFLICT DO NOTHING");
        inserted += query.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    println!(
        "   ✓ Linked {} rows in {} in {:?}",
        inserted,
        table,
        start_time.elapsed()
    );
    Ok(inserted)
}
