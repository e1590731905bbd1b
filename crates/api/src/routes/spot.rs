//! Route definitions for the spot resource, mounted at `/spot`.
//!
//! All routes require a bearer token; the handlers enforce it via the
//! `AuthUser` extractor.

use axum::routing::get;
use axum::Router;

use crate::handlers::spot;
use crate::state::AppState;

/// ```text
/// GET    /          -> list (paginated, ?size=&page=)
/// POST   /          -> create (multipart)
/// GET    /{id}      -> show
/// PUT    /{id}      -> update (multipart)
/// PATCH  /{id}      -> update (multipart)
/// DELETE /{id}      -> destroy (owner or admin, soft delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spot::list).post(spot::create))
        .route(
            "/{id}",
            get(spot::show)
                .put(spot::update)
                .patch(spot::update)
                .delete(spot::destroy),
        )
}
