use axum::{
    Router,
    middleware::from_fn,
    routing::{get, put},
};

use cookbook_models::roles;

use crate::middleware::{authenticated, guarded};
use crate::middleware::query_options::attach_query_options;
use crate::state::AppState;

use super::controller::{delete_user, get_user, get_users, update_user};

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    let signed_in = authenticated(Router::new().route("/{id}", get(get_user)), state);

    let admin = guarded(
        Router::new()
            .route(
                "/",
                get(get_users).route_layer(from_fn(attach_query_options)),
            )
            .route("/{id}", put(update_user).delete(delete_user)),
        state,
        &[roles::ADMIN],
    );

    signed_in.merge(admin)
}
