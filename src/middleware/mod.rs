//! Request pipeline stages.
//!
//! - [`query_options`]: normalizes list parameters into [`QueryOptions`](cookbook_core::QueryOptions)
//! - [`auth`]: resolves the bearer token to a user ([`AuthUser`](auth::AuthUser))
//! - [`role`]: admits only users holding one of a route's roles
//!
//! Protected routes run `authenticate` before `require_roles`; [`guarded`]
//! applies both in that order, [`authenticated`] only the first.

pub mod auth;
pub mod query_options;
pub mod role;

use axum::{Router, middleware::from_fn_with_state};

use crate::state::AppState;

use self::auth::authenticate;
use self::role::{RoleGate, require_roles};

/// Puts every route of `router` behind the token gate only.
pub fn authenticated(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router.route_layer(from_fn_with_state(state.clone(), authenticate))
}

/// Puts every route of `router` behind the token gate and a role gate.
pub fn guarded(router: Router<AppState>, state: &AppState, roles: &[&str]) -> Router<AppState> {
    authenticated(
        router.route_layer(from_fn_with_state(
            RoleGate::new(roles.iter().copied()),
            require_roles,
        )),
        state,
    )
}
