//! Fake account generation.

use std::time::Instant;

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::models::{SEED_EMAIL_DOMAIN, UserSeed};

/// Generates `count` accounts sharing one password hash.
///
/// The index is part of the local part so emails never collide.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let forename: String = FirstName().fake();
            let surname: String = LastName().fake();
            let email = seed_email(&forename, &surname, idx);

            UserSeed {
                email,
                forename,
                surname,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

fn seed_email(forename: &str, surname: &str, idx: usize) -> String {
    let local: String = format!("{forename}.{surname}")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect::<String>()
        .to_lowercase();
    format!("{local}+{idx}@{SEED_EMAIL_DOMAIN}")
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> anyhow::Result<Vec<i64>> {
    let start_time = Instant::now();
    println!("👥 Seeding {count} users...");

    let users = generate_users(count, password_hash);
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_users_batch(db: &PgPool, users: &[UserSeed]) -> anyhow::Result<Vec<i64>> {
    // 4 params per user
    const BATCH_SIZE: usize = 1000;

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let mut query =
            QueryBuilder::<Postgres>::new("INSERT INTO users (email, forename, surname, password) ");
        query.push_values(chunk, |mut row, user| {
            row.push_bind(&user.email)
                .push_bind(&user.forename)
                .push_bind(&user.surname)
                .push_bind(&user.password_hash);
        });
        query.push(" RETURNING id");

        let chunk_ids: Vec<i64> = query.build_query_scalar::<i64>().fetch_all(&mut *tx).await?;
        ids.extend(chunk_ids);
    }

    tx.commit().await?;
    Ok(ids)
}

/// Deletes seeded accounts. Their recipes, cookbooks, ingredients and links cascade.
pub async fn clear_users(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded users...");

    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(format!("%@{SEED_EMAIL_DOMAIN}"))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
