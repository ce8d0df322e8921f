//! Show entity model and DTOs.
//!
//! A show is a pure join entity: one artist performing at one venue at a
//! timestamp. Shows are never edited or deleted directly; they disappear
//! only when a parent venue or artist is deleted (cascade).

use encore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub starts_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for scheduling a new show.
///
/// Both ids must reference existing rows; the store's FK constraints
/// enforce this at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub starts_at: Timestamp,
}

/// A show in the upcoming-shows listing, joined with both parents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub starts_at: Timestamp,
}
