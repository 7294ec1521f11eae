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
    create_cookbook_category,
    delete_cookbook_category,
    get_cookbook_category,
    get_cookbook_categories,
    update_cookbook_category,
};

pub fn init_cookbook_categories_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_cookbook_categories).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_cookbook_category))
        .merge(guarded(
            Router::new()
                .route("/", post(create_cookbook_category))
                .route("/{id}", put(update_cookbook_category).delete(delete_cookbook_category)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
