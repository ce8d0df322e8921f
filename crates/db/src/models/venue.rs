//! Venue entity model, DTOs, and view-models.

use encore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    /// Stored as `TEXT[]`; never a delimited string.
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// DTO for editing a venue. Edits are full-replace: every editable column
/// is overwritten, and omitted optional fields clear the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVenue {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A venue line item in listings and search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one distinct (city, state) pair.
#[derive(Debug, Clone, Serialize)]
pub struct CityGroup {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

/// A show on a venue's detail page, joined with its artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub starts_at: Timestamp,
}

/// A venue plus its shows partitioned into past and upcoming.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
}
