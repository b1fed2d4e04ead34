use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw show form submission. Ids and the start time arrive as text and are
/// parsed by [`crate::validation::validate_show`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// A validated show booking ready for persistence.
///
/// The referenced artist and venue are checked for existence at the handler
/// boundary before the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// One row of the denormalized show listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}
