use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::{ListQuery, PaginationMeta, SortOrder};
use cookbook_models::{
    Category, Cookbook, CookbookCategory, CookbookRecipe, CreateCategoryDto,
    CreateCookbookCategoryDto, CreateCookbookDto, CreateCookbookRecipeDto, CreateIngredientDto,
    CreateRecipeCategoryDto, CreateRecipeDto, Ingredient, LoginRequest, LoginResponse, Recipe,
    RecipeCategory, RegisterRequest, UpdateCategoryDto, UpdateCookbookCategoryDto,
    UpdateCookbookDto, UpdateCookbookRecipeDto, UpdateIngredientDto, UpdateRecipeCategoryDto,
    UpdateRecipeDto, UpdateUserDto, User,
};

use crate::modules::{
    auth, categories, cookbook_categories, cookbook_recipes, cookbooks, ingredients,
    recipe_categories, recipes, users,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::controller::register,
        auth::controller::login,
        auth::controller::me,
        users::controller::get_users,
        users::controller::get_user,
        users::controller::update_user,
        users::controller::delete_user,
        recipes::controller::create_recipe,
        recipes::controller::get_recipes,
        recipes::controller::get_recipe,
        recipes::controller::update_recipe,
        recipes::controller::delete_recipe,
        cookbooks::controller::create_cookbook,
        cookbooks::controller::get_cookbooks,
        cookbooks::controller::get_cookbook,
        cookbooks::controller::update_cookbook,
        cookbooks::controller::delete_cookbook,
        categories::controller::create_category,
        categories::controller::get_categories,
        categories::controller::get_category,
        categories::controller::update_category,
        categories::controller::delete_category,
        ingredients::controller::create_ingredient,
        ingredients::controller::get_ingredients,
        ingredients::controller::get_ingredient,
        ingredients::controller::update_ingredient,
        ingredients::controller::delete_ingredient,
        cookbook_categories::controller::create_cookbook_category,
        cookbook_categories::controller::get_cookbook_categories,
        cookbook_categories::controller::get_cookbook_category,
        cookbook_categories::controller::update_cookbook_category,
        cookbook_categories::controller::delete_cookbook_category,
        cookbook_recipes::controller::create_cookbook_recipe,
        cookbook_recipes::controller::get_cookbook_recipes,
        cookbook_recipes::controller::get_cookbook_recipe,
        cookbook_recipes::controller::update_cookbook_recipe,
        cookbook_recipes::controller::delete_cookbook_recipe,
        recipe_categories::controller::create_recipe_category,
        recipe_categories::controller::get_recipe_categories,
        recipe_categories::controller::get_recipe_category,
        recipe_categories::controller::update_recipe_category,
        recipe_categories::controller::delete_recipe_category,
    ),
    components(
        schemas(
            ErrorResponse,
            ListQuery,
            SortOrder,
            PaginationMeta,
            User,
            UpdateUserDto,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            Recipe,
            CreateRecipeDto,
            UpdateRecipeDto,
            Cookbook,
            CreateCookbookDto,
            UpdateCookbookDto,
            Category,
            CreateCategoryDto,
            UpdateCategoryDto,
            Ingredient,
            CreateIngredientDto,
            UpdateIngredientDto,
            CookbookCategory,
            CreateCookbookCategoryDto,
            UpdateCookbookCategoryDto,
            CookbookRecipe,
            CreateCookbookRecipeDto,
            UpdateCookbookRecipeDto,
            RecipeCategory,
            CreateRecipeCategoryDto,
            UpdateRecipeCategoryDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the current user"),
        (name = "Users", description = "Account management"),
        (name = "Recipes", description = "Recipes"),
        (name = "Cookbooks", description = "Cookbooks"),
        (name = "Categories", description = "Categories, writable by admins only"),
        (name = "Ingredients", description = "Ingredients belonging to a recipe"),
        (name = "Cookbook Categories", description = "Cookbook to category links"),
        (name = "Cookbook Recipes", description = "Cookbook to recipe links"),
        (name = "Recipe Categories", description = "Recipe to category links")
    ),
    info(
        title = "Cookbook API",
        version = "0.1.0",
        description = "REST API for recipes, cookbooks and their categories, built with Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/me",
            "/api/users/{id}",
            "/api/recipes",
            "/api/cookbooks/{id}",
            "/api/categories",
            "/api/ingredients/{id}",
            "/api/cookbook-categories",
            "/api/cookbook-recipes/{id}",
            "/api/recipe-categories",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
