//! Route definitions for the `/venues` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /          -> list (grouped by city/state)
/// POST   /          -> create
/// GET    /search    -> search
/// GET    /{id}      -> get_by_id (detail with show partitions)
/// PUT    /{id}      -> update (full replace)
/// DELETE /{id}      -> delete (cascades shows)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list).post(venue::create))
        .route("/search", get(venue::search))
        .route(
            "/{id}",
            get(venue::get_by_id)
                .put(venue::update)
                .delete(venue::delete),
        )
}
