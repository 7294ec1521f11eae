use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::authenticated;
use crate::state::AppState;

use super::controller::{login, me, register};

pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(authenticated(Router::new().route("/me", get(me)), state))
}
