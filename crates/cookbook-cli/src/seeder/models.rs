//! Seed rows and the knobs controlling how many are generated.

/// Domain of every seeded account. `clear-seed` deletes by it.
pub const SEED_EMAIL_DOMAIN: &str = "seed.example.com";

/// Description stamped on seeded categories, which have no owner.
pub const SEED_CATEGORY_MARKER: &str = "Seeded category";

pub struct UserSeed {
    pub email: String,
    pub forename: String,
    pub surname: String,
    pub password_hash: String,
}

pub struct CategorySeed {
    pub name: String,
    pub description: String,
}

pub struct RecipeSeed {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
}

pub struct IngredientSeed {
    pub recipe_id: i64,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

pub struct CookbookSeed {
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CatalogueSize {
    pub categories: usize,
    pub recipes_per_user: usize,
    pub ingredients_per_recipe: usize,
    pub cookbooks_per_user: usize,
    /// Recipes filed into each cookbook.
    pub recipes_per_cookbook: usize,
    /// Categories attached to each recipe and to each cookbook.
    pub categories_per_item: usize,
}

impl Default for CatalogueSize {
    fn default() -> Self {
        Self {
            categories: 12,
            recipes_per_user: 5,
            ingredients_per_recipe: 6,
            cookbooks_per_user: 2,
            recipes_per_cookbook: 4,
            categories_per_item: 2,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    pub num_users: usize,
    pub catalogue: CatalogueSize,
}

impl SeedConfig {
    pub fn new(num_users: usize) -> Self {
        Self {
            num_users,
            ..Default::default()
        }
    }

    pub fn with_catalogue(mut self, catalogue: CatalogueSize) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn total_recipes(&self) -> usize {
        self.num_users * self.catalogue.recipes_per_user
    }

    pub fn total_cookbooks(&self) -> usize {
        self.num_users * self.catalogue.cookbooks_per_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_config_totals() {
        let config = SeedConfig::new(10).with_catalogue(CatalogueSize {
            recipes_per_user: 3,
            cookbooks_per_user: 1,
            ..Default::default()
        });
        assert_eq!(config.total_recipes(), 30);
        assert_eq!(config.total_cookbooks(), 10);
        assert_eq!(config.catalogue.categories, 12);
    }
}
