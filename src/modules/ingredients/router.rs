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
    create_ingredient, delete_ingredient, get_ingredient, get_ingredients, update_ingredient,
};

pub fn init_ingredients_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_ingredients).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_ingredient))
        .merge(guarded(
            Router::new()
                .route("/", post(create_ingredient))
                .route("/{id}", put(update_ingredient).delete(delete_ingredient)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
