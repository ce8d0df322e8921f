//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use encore_db::models::show::{CreateShow, Show, ShowListing};
use encore_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/shows
///
/// An insert naming a missing venue or artist fails with an FK violation,
/// surfaced as 409 INTEGRITY_ERROR; the shows table is left unchanged.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show listed"
    );
    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/shows
///
/// Upcoming shows only, soonest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShowListing>>> {
    let shows = ShowRepo::list_upcoming(&state.pool, Utc::now()).await?;
    Ok(Json(shows))
}
