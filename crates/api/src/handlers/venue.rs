//! Handlers for the `/venues` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use encore_core::error::CoreError;
use encore_core::profile;
use encore_core::types::DbId;
use encore_db::models::search::{SearchParams, SearchResults};
use encore_db::models::venue::{
    CityGroup, CreateVenue, UpdateVenue, Venue, VenueDetail, VenueSummary,
};
use encore_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    profile::validate_name(&input.name)?;
    profile::validate_genres(&input.genres)?;
    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok((StatusCode::CREATED, Json(venue)))
}

/// GET /api/v1/venues
///
/// Venues grouped by distinct (city, state) pairs, each venue annotated
/// with its upcoming-show count as of this request.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CityGroup>>> {
    let groups = VenueRepo::list_grouped_by_location(&state.pool, Utc::now()).await?;
    Ok(Json(groups))
}

/// GET /api/v1/venues/search?term=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults<VenueSummary>>> {
    let data = VenueRepo::search(&state.pool, &params.term, Utc::now()).await?;
    Ok(Json(SearchResults {
        count: data.len() as i64,
        data,
    }))
}

/// GET /api/v1/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VenueDetail>> {
    let detail = VenueRepo::detail(&state.pool, id, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/venues/{id}
///
/// Full-replace edit: every editable column is overwritten from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    profile::validate_name(&input.name)?;
    profile::validate_genres(&input.genres)?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }))?;
    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
///
/// Deletes the venue; its shows go with it (cascade).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VenueRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }))
    }
}
