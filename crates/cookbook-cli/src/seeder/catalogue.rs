//! Categories, recipes, ingredients and cookbooks.

use std::time::Instant;

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::models::{CategorySeed, CookbookSeed, IngredientSeed, RecipeSeed, SEED_CATEGORY_MARKER};

const UNITS: &[&str] = &["g", "kg", "ml", "l", "tsp", "tbsp", "cup", "pinch"];

const CUISINES: &[&str] = &[
    "Breakfast", "Baking", "Soups", "Salads", "Vegetarian", "Vegan", "Seafood", "Grilling",
    "Desserts", "Street Food", "Pasta", "Curries",
];

fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Category names are unique, so each carries its index.
pub fn generate_categories(count: usize) -> Vec<CategorySeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| CategorySeed {
            name: format!("{} {}", CUISINES[idx % CUISINES.len()], idx + 1),
            description: SEED_CATEGORY_MARKER.to_string(),
        })
        .collect()
}

pub fn generate_recipes(user_ids: &[i64], per_user: usize) -> Vec<RecipeSeed> {
    user_ids
        .par_iter()
        .flat_map(|&user_id| {
            (0..per_user)
                .map(|_| {
                    let words: Vec<String> = Words(2..4).fake();
                    RecipeSeed {
                        user_id,
                        title: title_case(&words),
                        description: Some(Sentence(6..12).fake::<String>()),
                        instructions: Some(Sentence(12..24).fake::<String>()),
                        servings: Some((1..9).fake::<i32>()),
                        prep_time_minutes: Some((5..60).fake::<i32>()),
                        cook_time_minutes: Some((0..180).fake::<i32>()),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn generate_ingredients(recipe_ids: &[i64], per_recipe: usize) -> Vec<IngredientSeed> {
    recipe_ids
        .par_iter()
        .flat_map(|&recipe_id| {
            (0..per_recipe)
                .map(|idx| {
                    let words: Vec<String> = Words(1..3).fake();
                    let quantity = (1..500).fake::<u32>();
                    IngredientSeed {
                        recipe_id,
                        name: words.join(" "),
                        quantity: Some(f64::from(quantity) / 2.0),
                        unit: Some(UNITS[idx % UNITS.len()].to_string()),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn generate_cookbooks(user_ids: &[i64], per_user: usize) -> Vec<CookbookSeed> {
    user_ids
        .par_iter()
        .flat_map(|&user_id| {
            (0..per_user)
                .map(|_| {
                    let words: Vec<String> = Words(2..4).fake();
                    CookbookSeed {
                        user_id,
                        name: format!("{} Cookbook", title_case(&words)),
                        description: Some(Sentence(4..10).fake::<String>()),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_categories(db: &PgPool, count: usize) -> anyhow::Result<Vec<i64>> {
    let start_time = Instant::now();
    println!("🏷️  Seeding {count} categories...");

    let categories = generate_categories(count);
    let mut ids = Vec::with_capacity(categories.len());
    let mut tx = db.begin().await?;

    for chunk in categories.chunks(1000) {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO categories (name, description) ");
        query.push_values(chunk, |mut row, category| {
            row.push_bind(&category.name).push_bind(&category.description);
        });
        // Re-running the seeder reuses existing names.
        query.push(
            " ON CONFLICT (name) DO UPDATE SET description = EXCLUDED.description RETURNING id",
        );
        ids.extend(query.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!(
        "   ✓ Inserted {} categories in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn seed_recipes(
    db: &PgPool,
    user_ids: &[i64],
    per_user: usize,
) -> anyhow::Result<Vec<i64>> {
    let start_time = Instant::now();
    println!("🍲 Seeding {} recipes...", user_ids.len() * per_user);

    let recipes = generate_recipes(user_ids, per_user);
    let mut ids = Vec::with_capacity(recipes.len());
    let mut tx = db.begin().await?;

    // 7 params per recipe
    for chunk in recipes.chunks(1000) {
        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO recipes (user_id, title, description, instructions, servings, \
             prep_time_minutes, cook_time_minutes) ",
        );
        query.push_values(chunk, |mut row, recipe| {
            row.push_bind(recipe.user_id)
                .push_bind(&recipe.title)
                .push_bind(&recipe.description)
                .push_bind(&recipe.instructions)
                .push_bind(recipe.servings)
                .push_bind(recipe.prep_time_minutes)
                .push_bind(recipe.cook_time_minutes);
        });
        query.push(" RETURNING id");
        ids.extend(query.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!(
        "   ✓ Inserted {} recipes in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn seed_ingredients(
    db: &PgPool,
    recipe_ids: &[i64],
    per_recipe: usize,
) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🥕 Seeding {} ingredients...", recipe_ids.len() * per_recipe);

    let ingredients = generate_ingredients(recipe_ids, per_recipe);
    let mut inserted = 0;
    let mut tx = db.begin().await?;

    for chunk in ingredients.chunks(2000) {
        let mut query =
            QueryBuilder::<Postgres>::new("INSERT INTO ingredients (recipe_id, name, quantity, unit) ");
        query.push_values(chunk, |mut row, ingredient| {
            row.push_bind(ingredient.recipe_id)
                .push_bind(&ingredient.name)
                .push_bind(ingredient.quantity)
                .push_bind(&ingredient.unit);
        });
        inserted += query.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    println!(
        "   ✓ Inserted {} ingredients in {:?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

pub async fn seed_cookbooks(
    db: &PgPool,
    user_ids: &[i64],
    per_user: usize,
) -> anyhow::Result<Vec<i64>> {
    let start_time = Instant::now();
    println!("📒 Seeding {} cookbooks...", user_ids.len() * per_user);

    let cookbooks = generate_cookbooks(user_ids, per_user);
    let mut ids = Vec::with_capacity(cookbooks.len());
    let mut tx = db.begin().await?;

    for chunk in cookbooks.chunks(1000) {
        let mut query =
            QueryBuilder::<Postgres>::new("INSERT INTO cookbooks (user_id, name, description) ");
        query.push_values(chunk, |mut row, cookbook| {
            row.push_bind(cookbook.user_id)
                .push_bind(&cookbook.name)
                .push_bind(&cookbook.description);
        });
        query.push(" RETURNING id");
        ids.extend(query.build_query_scalar::<i64>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!(
        "   ✓ Inserted {} cookbooks in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn clear_categories(db: &PgPool) -> anyhow::Result<u64> {
    let deleted = sqlx::query("DELETE FROM categories WHERE description = $1")
        .bind(SEED_CATEGORY_MARKER)
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Deleted {deleted} seeded categories");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_are_unique() {
        let categories = generate_categories(30);
        let mut names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 30);
        assert!(
            categories
                .iter()
                .all(|c| c.description == SEED_CATEGORY_MARKER)
        );
    }

    #[test]
    fn test_recipes_belong_to_their_users() {
        let recipes = generate_recipes(&[1, 2, 3], 4);
        assert_eq!(recipes.len(), 12);
        assert_eq!(recipes.iter().filter(|r| r.user_id == 2).count(), 4);
        assert!(recipes.iter().all(|r| r.servings.is_some_and(|s| s >= 1)));
        assert!(recipes.iter().all(|r| !r.title.trim().is_empty()));
    }

    #[test]
    fn test_ingredient_quantities_are_positive() {
        let ingredients = generate_ingredients(&[10, 11], 3);
        assert_eq!(ingredients.len(), 6);
        assert!(
            ingredients
                .iter()
                .all(|i| i.quantity.is_some_and(|q| q > 0.0))
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            title_case(&["lemon".to_string(), "tart".to_string()]),
            "Lemon Tart"
        );
    }
}
