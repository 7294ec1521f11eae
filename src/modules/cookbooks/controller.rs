use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use cookbook_core::errors::ErrorResponse;
use cookbook_core::pagination::ListQuery;
use cookbook_core::{AppError, Paginated};
use cookbook_models::{Cookbook, CreateCookbookDto, UpdateCookbookDto};

use crate::middleware::auth::AuthUser;
use crate::middleware::query_options::ListOptions;
use crate::modules::cookbooks::service::CookbookService;
use crate::state::AppState;
use crate::utils::path::ResourceId;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/cookbooks",
    request_body = CreateCookbookDto,
    responses(
        (status = 201, description = "Cookbook created", body = Cookbook),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Cookbooks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = auth_user.0.id))]
pub async fn create_cookbook(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCookbookDto>,
) -> Result<(StatusCode, Json<Cookbook>), AppError> {
    let cookbook = CookbookService::create(&state.db, auth_user.0.id, dto).await?;
    Ok((StatusCode::CREATED, Json(cookbook)))
}

#[utoipa::path(
    get,
    path = "/api/cookbooks",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated cookbooks", body = Paginated<Cookbook>),
        (status = 400, description = "Invalid sort or filter column", body = ErrorResponse)
    ),
    tag = "Cookbooks"
)]
#[instrument(skip(state))]
pub async fn get_cookbooks(
    State(state): State<AppState>,
    ListOptions(options): ListOptions,
) -> Result<Json<Paginated<Cookbook>>, AppError> {
    Ok(Json(CookbookService::list(&state.db, &options).await?))
}

#[utoipa::path(
    get,
    path = "/api/cookbooks/{id}",
    params(("id" = i64, Path, description = "Cookbook ID")),
    responses(
        (status = 200, description = "Cookbook details", body = Cookbook),
        (status = 400, description = "Invalid cookbook id", body = ErrorResponse),
        (status = 404, description = "Cookbook not found", body = ErrorResponse)
    ),
    tag = "Cookbooks"
)]
#[instrument(skip(state))]
pub async fn get_cookbook(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Cookbook>, AppError> {
    Ok(Json(CookbookService::find_by_id(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/cookbooks/{id}",
    params(("id" = i64, Path, description = "Cookbook ID")),
    request_body = UpdateCookbookDto,
    responses(
        (status = 200, description = "Cookbook updated", body = Cookbook),
        (status = 400, description = "Invalid input or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cookbook not found", body = ErrorResponse)
    ),
    tag = "Cookbooks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_cookbook(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateCookbookDto>,
) -> Result<Json<Cookbook>, AppError> {
    Ok(Json(CookbookService::update(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cookbooks/{id}",
    params(("id" = i64, Path, description = "Cookbook ID")),
    responses(
        (status = 204, description = "Cookbook deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cookbook not found", body = ErrorResponse)
    ),
    tag = "Cookbooks",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_cookbook(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, AppError> {
    CookbookService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
