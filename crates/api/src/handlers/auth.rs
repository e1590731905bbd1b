//! Handlers for authentication (register, login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use spotlog_core::error::CoreError;
use spotlog_core::roles::Role;
use spotlog_core::types::DbId;
use spotlog_db::models::token::CreateApiToken;
use spotlog_db::models::user::CreateUser;
use spotlog_db::repositories::{TokenRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::token::generate_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::EmptyResponse;
use crate::state::AppState;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. The token plaintext is visible exactly once,
/// here; only its hash is stored server-side.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
    pub access_token: String,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Validates the registration fields, hashes the password, and creates the
/// user. Returns 201 with no echoed data; a duplicate email surfaces as 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<EmptyResponse>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".into(),
        )));
    }
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "email must be a valid email address".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        password_hash,
        role: Role::User,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(EmptyResponse::message_only("User registered successfully")),
    ))
}

/// POST /login
///
/// Authenticate with email + password. On mismatch the response is a fixed
/// 401 "Invalid credentials" regardless of which check failed, so the
/// endpoint does not reveal whether an email is registered.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email.trim().to_lowercase())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let (plaintext, token_hash) = generate_token();
    let token_input = CreateApiToken {
        user_id: user.id,
        token_hash,
        name: "api".to_string(),
    };
    TokenRepo::create(&state.pool, &token_input).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserSummary {
            id: user.id,
            name: user.name,
            email: user.email,
        },
        access_token: plaintext,
    }))
}

/// POST /logout
///
/// Revoke the token this request authenticated with. Other sessions of the
/// same user stay valid.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<EmptyResponse>> {
    TokenRepo::revoke_by_hash(&state.pool, &auth_user.token_hash).await?;

    tracing::info!(user_id = auth_user.user_id, "User logged out");

    Ok(Json(EmptyResponse::message_only("Logged out successfully")))
}
