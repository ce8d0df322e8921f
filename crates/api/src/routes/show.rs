//! Route definitions for the `/shows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /          -> list (upcoming only)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show::list).post(show::create))
}
