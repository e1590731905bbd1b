//! Route definitions for the expense resource, mounted at `/expenses`.

use axum::routing::get;
use axum::Router;

use crate::handlers::expense;
use crate::state::AppState;

/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> show
/// PUT    /{id}      -> update
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(expense::list).post(expense::create))
        .route(
            "/{id}",
            get(expense::show)
                .put(expense::update)
                .patch(expense::update)
                .delete(expense::destroy),
        )
}
