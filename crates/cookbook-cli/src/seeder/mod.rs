//! Fake data for local development.
//!
//! Generation runs on the rayon pool; inserts are batched multi-row
//! statements inside one transaction per table.

pub mod catalogue;
pub mod links;
pub mod models;
pub mod users;

use std::time::Instant;

use sqlx::PgPool;

use cookbook_core::hash_password;

pub use models::{CatalogueSize, SEED_EMAIL_DOMAIN, SeedConfig};

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let size = &config.catalogue;
    println!(
        "🌱 Seeding {} users, {} recipes and {} cookbooks\n",
        config.num_users,
        config.total_recipes(),
        config.total_cookbooks()
    );

    let password_hash = hash_password(SEED_PASSWORD)?;

    let user_ids = users::seed_users(db, config.num_users, &password_hash).await?;
    let category_ids = catalogue::seed_categories(db, size.categories).await?;
    let recipe_ids = catalogue::seed_recipes(db, &user_ids, size.recipes_per_user).await?;
    catalogue::seed_ingredients(db, &recipe_ids, size.ingredients_per_recipe).await?;
    let cookbook_ids = catalogue::seed_cookbooks(db, &user_ids, size.cookbooks_per_user).await?;

    println!("🔗 Linking catalogue...");
    links::insert_pairs(
        db,
        "cookbook_recipes",
        ("cookbook_id", "recipe_id"),
        &links::spread_pairs(&cookbook_ids, &recipe_ids, size.recipes_per_cookbook),
    )
    .await?;
    links::insert_pairs(
        db,
        "cookbook_categories",
        ("cookbook_id", "category_id"),
        &links::spread_pairs(&cookbook_ids, &category_ids, size.categories_per_item),
    )
    .await?;
    links::insert_pairs(
        db,
        "recipe_categories",
        ("recipe_id", "category_id"),
        &links::spread_pairs(&recipe_ids, &category_ids, size.categories_per_item),
    )
    .await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    println!("   All seeded accounts use the password '{SEED_PASSWORD}'");
    Ok(())
}

/// Removes seeded accounts (cascading to their content) and seeded categories.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<()> {
    let start_time = Instant::now();
    users::clear_users(db).await?;
    catalogue::clear_categories(db).await?;
    println!("✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(())
}
