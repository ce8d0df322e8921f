//! Repository for the `venues` table.

use encore_core::text::contains_pattern;
use encore_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::venue::{
    CityGroup, CreateVenue, UpdateVenue, Venue, VenueDetail, VenueShow, VenueSummary,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, address, phone, website_link, image_link, \
     facebook_link, seeking_talent, seeking_description, created_at, updated_at";

/// One row of the grouped-by-location listing, before folding into groups.
#[derive(Debug, FromRow)]
struct LocationRow {
    city: Option<String>,
    state: Option<String>,
    id: DbId,
    name: String,
    num_upcoming_shows: i64,
}

/// Provides CRUD and listing operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, genres, city, state, address, phone, website_link,
                                 image_link, facebook_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues grouped by distinct (city, state) pairs.
    ///
    /// NULL city/state values group together (one "no location" group).
    /// Each venue carries its count of shows with `starts_at >= now`.
    pub async fn list_grouped_by_location(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<CityGroup>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT v.city, v.state, v.id, v.name,
                    (SELECT COUNT(*) FROM shows s
                      WHERE s.venue_id = v.id AND s.starts_at >= $1) AS num_upcoming_shows
             FROM venues v
             ORDER BY v.city, v.state, LOWER(v.name)",
        )
        .bind(now)
        .fetch_all(pool)
        .await?;

        // Rows arrive sorted by (city, state), so one linear fold groups them.
        let mut groups: Vec<CityGroup> = Vec::new();
        for row in rows {
            let summary = VenueSummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.num_upcoming_shows,
            };
            match groups.last_mut() {
                Some(group) if group.city == row.city && group.state == row.state => {
                    group.venues.push(summary);
                }
                _ => groups.push(CityGroup {
                    city: row.city,
                    state: row.state,
                    venues: vec![summary],
                }),
            }
        }
        Ok(groups)
    }

    /// Case-insensitive substring search on venue name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name,
                    (SELECT COUNT(*) FROM shows s
                      WHERE s.venue_id = v.id AND s.starts_at >= $2) AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $1
             ORDER BY LOWER(v.name)",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Fetch a venue plus its shows partitioned into past and upcoming.
    ///
    /// Returns `None` if no venue with the given `id` exists.
    pub async fn detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<VenueDetail>, sqlx::Error> {
        let Some(venue) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let shows = sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.starts_at
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.starts_at",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) =
            shows.into_iter().partition(|s| s.starts_at >= now);

        Ok(Some(VenueDetail {
            venue,
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
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                genres = $3,
                city = $4,
                state = $5,
                address = $6,
                phone = $7,
                website_link = $8,
                image_link = $9,
                facebook_link = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by ID, cascading its shows. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
