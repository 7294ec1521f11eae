use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};

use cookbook_models::roles;

use crate::middleware::guarded;
use crate::middleware::query_options::attach_query_options;
use crate::state::AppState;

use super::controller::{
    create_recipe_category,
    delete_recipe_category,
    get_recipe_category,
    get_recipe_categories,
    update_recipe_category,
};

pub fn init_recipe_categories_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_recipe_categories).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_recipe_category))
        .merge(guarded(
            Router::new()
                .route("/", post(create_recipe_category))
                .route("/{id}", put(update_recipe_category).delete(delete_recipe_category)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
