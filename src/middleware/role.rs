use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use cookbook_core::AppError;

use crate::middleware::auth::{AuthUser, LOGIN_REQUIRED_MESSAGE};

pub const FORBIDDEN_MESSAGE: &str = "You are not authorized to access the specified route";

/// The roles a route admits, fixed when the route is registered.
#[derive(Debug, Clone)]
pub struct RoleGate {
    allowed: Arc<[String]>,
}

impl RoleGate {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn admits(&self, user: &AuthUser) -> bool {
        user.0.has_any_role(self.allowed())
    }
}

/// Role gate, used with `middleware::from_fn_with_state(RoleGate::new([..]), require_roles)`.
pub async fn require_roles(
    State(gate): State<RoleGate>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_user) = req.extensions().get::<AuthUser>() else {
        return Err(AppError::unauthorized(LOGIN_REQUIRED_MESSAGE));
    };

    if !gate.admits(auth_user) {
        return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
    }

    Ok(next.run(req).await)
}
