use serde::{Deserialize, Serialize};

/// Free-text search request shared by the venue and artist search endpoints.
/// An absent or empty term matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Choice lists served with the blank create forms. The genre list is
/// advisory only; genres are stored as free-text tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormChoices {
    pub states: Vec<String>,
    pub genres: Vec<String>,
}

/// Receipt for a successful create or edit submission. `url` is the
/// canonical follow-up view, and `message` is the flash-style confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: i32,
    pub message: String,
    pub url: String,
}

/// Receipt for a successful deletion, pointing back at the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub deleted: bool,
    pub message: String,
    pub url: String,
}
