//! Handlers for the `/artists` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use encore_core::error::CoreError;
use encore_core::profile;
use encore_core::types::DbId;
use encore_db::models::artist::{
    Artist, ArtistDetail, ArtistRef, ArtistSummary, CreateArtist, UpdateArtist,
};
use encore_db::models::search::{SearchParams, SearchResults};
use encore_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    profile::validate_name(&input.name)?;
    profile::validate_genres(&input.genres)?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ArtistRef>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/v1/artists/search?term=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults<ArtistSummary>>> {
    let data = ArtistRepo::search(&state.pool, &params.term, Utc::now()).await?;
    Ok(Json(SearchResults {
        count: data.len() as i64,
        data,
    }))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let detail = ArtistRepo::detail(&state.pool, id, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/artists/{id}
///
/// Full-replace edit: every editable column is overwritten from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    profile::validate_name(&input.name)?;
    profile::validate_genres(&input.genres)?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    Ok(Json(artist))
}

/// DELETE /api/v1/artists/{id}
///
/// Deletes the artist; their shows go with them (cascade).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ArtistRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))
    }
}
