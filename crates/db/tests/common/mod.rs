//! Shared DTO constructors for repository tests.

use encore_db::models::artist::CreateArtist;
use encore_db::models::venue::CreateVenue;

pub fn new_venue(name: &str, city: Option<&str>, state: Option<&str>) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        genres: vec![],
        city: city.map(str::to_string),
        state: state.map(str::to_string),
        address: None,
        phone: None,
        website_link: None,
        image_link: None,
        facebook_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        genres: vec![],
        city: None,
        state: None,
        phone: None,
        website_link: None,
        image_link: None,
        facebook_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}
