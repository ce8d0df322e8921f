//! Repository for the `artists` table.

use encore_core::text::contains_pattern;
use encore_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{
    Artist, ArtistDetail, ArtistRef, ArtistShow, ArtistSummary, CreateArtist, UpdateArtist,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, phone, website_link, image_link, \
     facebook_link, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD and listing operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, genres, city, state, phone, website_link,
                                  image_link, facebook_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flat listing of all artists as id + name pairs, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistRef>, sqlx::Error> {
        sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY LOWER(name)")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on artist name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name,
                    (SELECT COUNT(*) FROM shows s
                      WHERE s.artist_id = a.id AND s.starts_at >= $2) AS num_upcoming_shows
             FROM artists a
             WHERE a.name ILIKE $1
             ORDER BY LOWER(a.name)",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Fetch an artist plus their shows partitioned into past and upcoming.
    ///
    /// Returns `None` if no artist with the given `id` exists.
    pub async fn detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let shows = sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.starts_at
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.starts_at",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) =
            shows.into_iter().partition(|s| s.starts_at >= now);

        Ok(Some(ArtistDetail {
            artist,
            past_shows_count: past_shows.len() as i64,
            upcoming_shows_count: upcoming_shows.len() as i64,
            past_shows,
            upcoming_shows,
        }))
    }

    /// Full-replace update of every editable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                genres = $3,
                city = $4,
                state = $5,
                phone = $6,
                website_link = $7,
                image_link = $8,
                facebook_link = $9,
                seeking_venue = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist by ID, cascading their shows. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
