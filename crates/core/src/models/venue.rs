use serde::{Deserialize, Serialize};

/// Raw venue form submission, exactly as posted by the client.
///
/// Every field arrives as text; [`crate::validation::validate_venue`] turns it
/// into a [`NewVenue`] or a list of field errors. The same shape is returned
/// by the edit-form endpoint, pre-filled with the stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    /// Two-valued field: "Yes" means the venue is seeking talent.
    #[serde(default)]
    pub seeking_talent: String,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A validated, cleaned venue record ready for persistence.
///
/// Free-text fields are trimmed, the phone number is reduced to 10 raw
/// digits, empty optional fields are `None`, and the seeking flag is a bool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// One venue inside a listing group or a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// One (city, state) group in the venue directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Input row for the locality grouping in [`crate::display::group_by_locality`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueListingRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSearchResponse {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

/// A booking on the venue detail page, seen from the venue's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueShowEntry {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Display-ready venue detail view.
///
/// `phone` is formatted NNN-NNN-NNNN and the show lists are partitioned
/// against the wall-clock time the view was rendered at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub upcoming_shows_count: usize,
}
