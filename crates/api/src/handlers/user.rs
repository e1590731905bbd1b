//! Handler for the `/user` endpoint.

use axum::Json;
use serde::Serialize;
use spotlog_core::roles::Role;
use spotlog_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

/// The current user as returned by `GET /user`.
#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// GET /user
///
/// Returns the authenticated user's summary. 401 without a valid token.
pub async fn current_user(auth_user: AuthUser) -> AppResult<Json<CurrentUser>> {
    Ok(Json(CurrentUser {
        id: auth_user.user_id,
        name: auth_user.name,
        email: auth_user.email,
        role: auth_user.role,
    }))
}
