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
    create_category, delete_category, get_categories, get_category, update_category,
};

pub fn init_categories_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_categories).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_category))
        .merge(guarded(
            Router::new()
                .route("/", post(create_category))
                .route("/{id}", put(update_category).delete(delete_category)),
            state,
            &[roles::ADMIN],
        ))
}
