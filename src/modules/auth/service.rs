use sqlx::PgPool;
use tracing::{info, instrument, warn};

use cookbook_auth::create_access_token;
use cookbook_config::JwtConfig;
use cookbook_core::{AppError, verify_password};
use cookbook_models::{LoginRequest, LoginResponse, RegisterRequest, User};

use crate::modules::users::service::UserService;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        let user = UserService::register(db, dto).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(record) = UserService::find_with_password(db, &dto.email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        if !verify_password(&dto.password, &record.password)? {
            warn!(user_id = record.user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        let access_token = create_access_token(record.user.id, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_config.access_token_expiry,
            user: record.user,
        })
    }
}
