use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};

use cookbook_models::roles;

use crate::middleware::guarded;
use crate::middleware::query_options::attach_query_options;
use crate::state::AppState;

use super::controller::{create_recipe, delete_recipe, get_recipe, get_recipes, update_recipe};

pub fn init_recipes_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_recipes).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_recipe))
        .merge(guarded(
            Router::new()
                .route("/", post(create_recipe))
                .route("/{id}", put(update_recipe).delete(delete_recipe)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
