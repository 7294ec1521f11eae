use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use cookbook_config::CorsConfig;
use cookbook_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::init_auth_router;
use crate::modules::categories::init_categories_router;
use crate::modules::cookbook_categories::init_cookbook_categories_router;
use crate::modules::cookbook_recipes::init_cookbook_recipes_router;
use crate::modules::cookbooks::init_cookbooks_router;
use crate::modules::ingredients::init_ingredients_router;
use crate::modules::recipe_categories::init_recipe_categories_router;
use crate::modules::recipes::init_recipes_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router(&state))
                .nest("/users", init_users_router(&state))
                .nest("/recipes", init_recipes_router(&state))
                .nest("/cookbooks", init_cookbooks_router(&state))
                .nest("/categories", init_categories_router(&state))
                .nest("/ingredients", init_ingredients_router(&state))
                .nest(
                    "/cookbook-categories",
                    init_cookbook_categories_router(&state),
                )
                .nest("/cookbook-recipes", init_cookbook_recipes_router(&state))
                .nest(
                    "/recipe-categories",
                    init_recipe_categories_router(&state),
                ),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

async fn route_not_found() -> AppError {
    AppError::not_found(ROUTE_NOT_FOUND_MESSAGE)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
