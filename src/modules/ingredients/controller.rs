use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::ListQuery;
use cookbook_core::{AppError, Paginated};
use cookbook_models::{CreateIngredientDto, Ingredient, UpdateIngredientDto};

use crate::middleware::query_options::ListOptions;
use crate::modules::ingredients::service::IngredientService;
use crate::state::AppState;
use crate::utils::path::ResourceId;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/ingredients",
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Ingredient created", body = Ingredient),
        (status = 400, description = "Invalid input or unknown recipe", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Ingredients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateIngredientDto>,
) -> Result<(StatusCode, Json<Ingredient>), AppError> {
    let ingredient = IngredientService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// List ingredients; filter on `recipe_id` to get one recipe's list
#[utoipa::path(
    get,
    path = "/api/ingredients",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated ingredients", body = Paginated<Ingredient>),
        (status = 400, description = "Invalid sort or filter column", body = ErrorResponse)
    ),
    tag = "Ingredients"
)]
#[instrument(skip(state))]
pub async fn get_ingredients(
    State(state): State<AppState>,
    ListOptions(options): ListOptions,
) -> Result<Json<Paginated<Ingredient>>, AppError> {
    Ok(Json(IngredientService::list(&state.db, &options).await?))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient details", body = Ingredient),
        (status = 400, description = "Invalid ingredient id", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    tag = "Ingredients"
)]
#[instrument(skip(state))]
pub async fn get_ingredient(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Ingredient>, AppError> {
    Ok(Json(IngredientService::find_by_id(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient ID")),
    request_body = UpdateIngredientDto,
    responses(
        (status = 200, description = "Ingredient updated", body = Ingredient),
        (status = 400, description = "Invalid input or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    tag = "Ingredients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_ingredient(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateIngredientDto>,
) -> Result<Json<Ingredient>, AppError> {
    Ok(Json(IngredientService::update(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    params(("id" = i64, Path, description = "Ingredient ID")),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    tag = "Ingredients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, AppError> {
    IngredientService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
