//! Signup, login, and token refresh.

use std::sync::Arc;

use tracing::info;

use docportal_auth::{JwtDecoder, JwtEncoder, PasswordHasher, TokenPair};
use docportal_core::config::auth::AuthConfig;
use docportal_core::error::AppError;
use docportal_database::repositories::user::UserRepository;
use docportal_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Handles account creation and credential-based authentication.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher (Argon2id).
    password_hasher: Arc<PasswordHasher>,
    /// JWT token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    jwt_decoder: Arc<JwtDecoder>,
    /// Auth configuration.
    config: AuthConfig,
}

/// Result of a successful login or refresh.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued token pair.
    pub tokens: TokenPair,
}

/// Parameters for creating a new account.
#[derive(Debug, Clone)]
pub struct SignupParams {
    /// Login email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Full display name.
    pub full_name: String,
    /// Requested role.
    pub role: UserRole,
    /// Department (optional).
    pub department: Option<String>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            jwt_encoder,
            jwt_decoder,
            config,
        }
    }

    /// Creates a new account and returns a logged-in session for it.
    pub async fn signup(&self, params: SignupParams) -> Result<LoginResult, AppError> {
        if params.password.len() < self.config.min_password_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }
        if params.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name is required"));
        }

        let password_hash = self.password_hasher.hash_password(&params.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email: params.email.trim().to_lowercase(),
                password_hash,
                full_name: params.full_name.trim().to_string(),
                role: params.role,
                department: params.department,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account created");

        let tokens = self.issue_tokens(&user)?;
        Ok(LoginResult { user, tokens })
    }

    /// Verifies credentials and returns a fresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        self.user_repo.touch_last_login(user.id).await?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        let tokens = self.issue_tokens(&user)?;
        Ok(LoginResult { user, tokens })
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// The user row is re-read so the new tokens reflect current account
    /// state rather than the state at the previous issuance.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResult, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let tokens = self.issue_tokens(&user)?;
        Ok(LoginResult { user, tokens })
    }

    /// Loads the acting user's own profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Lists all employee accounts (admin only, used for assignment pickers).
    pub async fn list_employees(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        self.user_repo.find_by_role(UserRole::Employee).await
    }

    fn issue_tokens(&self, user: &User) -> Result<TokenPair, AppError> {
        self.jwt_encoder
            .generate_token_pair(user.id, user.role, &user.email, &user.full_name)
    }
}
