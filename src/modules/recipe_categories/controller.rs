use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::ListQuery;
use cookbook_core::{AppError, Paginated};
use cookbook_models::{CreateRecipeCategoryDto, RecipeCategory, UpdateRecipeCategoryDto};

use crate::middleware::query_options::ListOptions;
use crate::modules::links::LinkService;
use crate::state::AppState;
use crate::utils::path::ResourceId;
use crate::validator::ValidatedJson;

type Service = LinkService<RecipeCategory>;

/// Tag a recipe with a category
#[utoipa::path(
    post,
    path = "/api/recipe-categories",
    request_body = CreateRecipeCategoryDto,
    responses(
        (status = 201, description = "Link created", body = RecipeCategory),
        (status = 400, description = "Invalid ids, unknown parent or duplicate link", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Recipe Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_recipe_category(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRecipeCategoryDto>,
) -> Result<(StatusCode, Json<RecipeCategory>), AppError> {
    let link = Service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    get,
    path = "/api/recipe-categories",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated links", body = Paginated<RecipeCategory>),
        (status = 400, description = "Invalid sort or filter column", body = ErrorResponse)
    ),
    tag = "Recipe Categories"
)]
#[instrument(skip(state))]
pub async fn get_recipe_categories(
    State(state): State<AppState>,
    ListOptions(options): ListOptions,
) -> Result<Json<Paginated<RecipeCategory>>, AppError> {
    Ok(Json(Service::list(&state.db, &options).await?))
}

#[utoipa::path(
    get,
    path = "/api/recipe-categories/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    responses(
        (status = 200, description = "Link details", body = RecipeCategory),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Recipe Categories"
)]
#[instrument(skip(state))]
pub async fn get_recipe_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<RecipeCategory>, AppError> {
    Ok(Json(Service::find_by_id(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/recipe-categories/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    request_body = UpdateRecipeCategoryDto,
    responses(
        (status = 200, description = "Link updated", body = RecipeCategory),
        (status = 400, description = "Invalid input or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Recipe Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_recipe_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateRecipeCategoryDto>,
) -> Result<Json<RecipeCategory>, AppError> {
    Ok(Json(Service::update(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/recipe-categories/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Recipe Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_recipe_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, AppError> {
    Service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
