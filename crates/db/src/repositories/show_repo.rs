//! Repository for the `shows` table.
//!
//! Shows are insert-only: they are removed exclusively through the cascade
//! when a parent venue or artist is deleted.

use encore_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, ShowListing};

/// Provides insert and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Schedule a new show, returning the created row.
    ///
    /// Referential integrity is enforced by the store: an insert naming a
    /// missing venue or artist fails with an FK violation and leaves the
    /// table unchanged. There is no application-level pre-check.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (venue_id, artist_id, starts_at)
             VALUES ($1, $2, $3)
             RETURNING id, venue_id, artist_id, starts_at, created_at",
        )
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.starts_at)
        .fetch_one(pool)
        .await
    }

    /// List all shows with `starts_at >= now`, joined with both parents,
    /// soonest first.
    pub async fn list_upcoming(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.starts_at
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             WHERE s.starts_at >= $1
             ORDER BY s.starts_at",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }
}
