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
    create_cookbook, delete_cookbook, get_cookbook, get_cookbooks, update_cookbook,
};

pub fn init_cookbooks_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_cookbooks).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_cookbook))
        .merge(guarded(
            Router::new()
                .route("/", post(create_cookbook))
                .route("/{id}", put(update_cookbook).delete(delete_cookbook)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
