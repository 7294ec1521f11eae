use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::ListQuery;
use cookbook_core::{AppError, Paginated};
use cookbook_models::{CreateCookbookRecipeDto, CookbookRecipe, UpdateCookbookRecipeDto};

use crate::middleware::query_options::ListOptions;
use crate::modules::links::LinkService;
use crate::state::AppState;
use crate::utils::path::ResourceId;
use crate::validator::ValidatedJson;

type Service = LinkService<CookbookRecipe>;

/// Add a recipe to a cookbook
#[utoipa::path(
    post,
    path = "/api/cookbook-recipes",
    request_body = CreateCookbookRecipeDto,
    responses(
        (status = 201, description = "Link created", body = CookbookRecipe),
        (status = 400, description = "Invalid ids, unknown parent or duplicate link", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Cookbook Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_cookbook_recipe(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCookbookRecipeDto>,
) -> Result<(StatusCode, Json<CookbookRecipe>), AppError> {
    let link = Service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    get,
    path = "/api/cookbook-recipes",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated links", body = Paginated<CookbookRecipe>),
        (status = 400, description = "Invalid sort or filter column", body = ErrorResponse)
    ),
    tag = "Cookbook Recipes"
)]
#[instrument(skip(state))]
pub async fn get_cookbook_recipes(
    State(state): State<AppState>,
    ListOptions(options): ListOptions,
) -> Result<Json<Paginated<CookbookRecipe>>, AppError> {
    Ok(Json(Service::list(&state.db, &options).await?))
}

#[utoipa::path(
    get,
    path = "/api/cookbook-recipes/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    responses(
        (status = 200, description = "Link details", body = CookbookRecipe),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Cookbook Recipes"
)]
#[instrument(skip(state))]
pub async fn get_cookbook_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<CookbookRecipe>, AppError> {
    Ok(Json(Service::find_by_id(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/cookbook-recipes/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    request_body = UpdateCookbookRecipeDto,
    responses(
        (status = 200, description = "Link updated", body = CookbookRecipe),
        (status = 400, description = "Invalid input or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Cookbook Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_cookbook_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateCookbookRecipeDto>,
) -> Result<Json<CookbookRecipe>, AppError> {
    Ok(Json(Service::update(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cookbook-recipes/{id}",
    params(("id" = i64, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    ),
    tag = "Cookbook Recipes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_cookbook_recipe(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, AppError> {
    Service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
