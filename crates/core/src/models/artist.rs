use serde::{Deserialize, Serialize};

/// Raw artist form submission. Same contract as the venue form, minus the
/// street address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    /// Two-valued field: "Yes" means the artist is seeking a venue.
    #[serde(default)]
    pub seeking_venue: String,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A validated, cleaned artist record ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// One artist in the alphabetical directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

/// One artist in a search result, with its fresh upcoming-show count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSearchMatch {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub count: usize,
    pub data: Vec<ArtistSearchMatch>,
}

/// A booking on the artist detail page, seen from the artist's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

/// Display-ready artist detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows_count: usize,
}
