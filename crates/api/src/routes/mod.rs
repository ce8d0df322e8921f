pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                 GET list grouped by (city, state), POST create
/// /venues/search          GET search?term=
/// /venues/{id}            GET detail, PUT update, DELETE delete
///
/// /artists                GET flat list, POST create
/// /artists/search         GET search?term=
/// /artists/{id}           GET detail, PUT update, DELETE delete
///
/// /shows                  GET upcoming listing, POST create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
