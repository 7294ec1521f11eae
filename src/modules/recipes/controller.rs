use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::ListQuery;
use cookbook_core::{AppError, Paginated};
use cookbook_models::{CreateRecipeDto, Recipe, UpdateRecipeDto};

use crate::middleware::auth::AuthUser;
use crate::middleware::query_options::ListOptions;
use crate::modules::recipes::service::RecipeService;
use crate::state::AppState;
use crate::utils::path::ResourceId;
use crate::validator::ValidatedJson;

/// Create a recipe owned by the caller
#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = auth_user.0.id))]
pub async fn create_recipe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRecipeDto>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = RecipeService::create(&state.db, auth_user.0.id, dto).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated recipes", body = Paginated<Recipe>),
        (status = 400, description = "Invalid sort or filter column", body = ErrorResponse)
    ),
    tag = "Recipes"
)]
#[instrument(skip(state))]
pub async fn get_recipes(
    State(state): State<AppState>,
    ListOptions(options): ListOptions,
) -> Result<Json<Paginated<Recipe>>, AppError> {
    Ok(Json(RecipeService::list(&state.db, &options).await?))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    params(("id" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 400, description = "Invalid recipe id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes"
)]
#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(RecipeService::find_by_id(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(("id" = i64, Path, description = "Recipe ID")),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Invalid input or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateRecipeDto>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(RecipeService::update(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    params(("id" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, AppError> {
    RecipeService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
