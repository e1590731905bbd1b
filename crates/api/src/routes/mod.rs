pub mod auth;
pub mod expense;
pub mod health;
pub mod spot;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health` and the
/// static `/storage` mount, which `main.rs` adds at the top level).
///
/// Route hierarchy:
///
/// ```text
/// /login                    login (public)
/// /register                 register (public)
/// /logout                   logout (requires auth)
/// /user                     current user (requires auth)
///
/// /expenses                 list, create (public)
/// /expenses/{id}            get, update (PUT/PATCH), delete
///
/// /spot                     list, create (requires auth)
/// /spot/{id}                get, update (PUT/PATCH), soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/expenses", expense::router())
        .nest("/spot", spot::router())
}
