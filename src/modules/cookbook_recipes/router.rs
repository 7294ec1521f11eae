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
    create_cookbook_recipe,
    delete_cookbook_recipe,
    get_cookbook_recipe,
    get_cookbook_recipes,
    update_cookbook_recipe,
};

pub fn init_cookbook_recipes_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_cookbook_recipes).route_layer(from_fn(attach_query_options)),
        )
        .route("/{id}", get(get_cookbook_recipe))
        .merge(guarded(
            Router::new()
                .route("/", post(create_cookbook_recipe))
                .route("/{id}", put(update_cookbook_recipe).delete(delete_cookbook_recipe)),
            state,
            &[roles::USER, roles::ADMIN],
        ))
}
