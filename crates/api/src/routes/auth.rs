//! Route definitions for authentication and the current-user endpoint.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, user};
use crate::state::AppState;

/// ```text
/// POST /login      -> login (public)
/// POST /register   -> register (public)
/// POST /logout     -> logout (requires auth)
/// GET  /user       -> current_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/user", get(user::current_user))
}
