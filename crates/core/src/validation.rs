//! Pure form validation.
//!
//! Each `validate_*` function takes a raw form and returns either a cleaned
//! record ready for persistence or the full list of field errors. Nothing is
//! persisted on failure; the caller re-presents the form with the messages
//! attached.

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FieldError;
use crate::models::artist::{ArtistForm, NewArtist};
use crate::models::common::FormChoices;
use crate::models::show::{NewShow, ShowForm};
use crate::models::venue::{NewVenue, VenueForm};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}[-. ]?\d{3}[-. ]?\d{4}$").expect("valid phone regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid link regex"));

/// Two-letter codes accepted by the state field.
pub const STATE_CODES: [&str; 52] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX",
    "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Suggested genre tags offered by the create forms. Not enforced on input;
/// genres are stored as free-text tags.
pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Accepted formats for the show start time.
const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn form_choices() -> FormChoices {
    FormChoices {
        states: STATE_CODES.iter().map(|s| s.to_string()).collect(),
        genres: GENRE_CHOICES.iter().map(|g| g.to_string()).collect(),
    }
}

/// The seeking flags are two-valued form fields: exactly "Yes" means true.
pub fn seeking_flag(value: &str) -> bool {
    value.trim() == "Yes"
}

fn required(field: &str, value: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
    }
    trimmed.to_string()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn state(value: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("state", "This field is required"));
    } else if !STATE_CODES.contains(&trimmed) {
        errors.push(FieldError::new("state", "Not a valid state code"));
    }
    trimmed.to_string()
}

/// Validates the phone field and reduces it to 10 raw digits for storage.
fn phone(value: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("phone", "This field is required"));
        return String::new();
    }
    if !PHONE_RE.is_match(trimmed) {
        errors.push(FieldError::new(
            "phone",
            "Phone number must have 10 digits, e.g. 512-555-1234",
        ));
        return trimmed.to_string();
    }
    trimmed.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Link fields are optional but must look like http(s) URLs when present.
fn link(field: &str, value: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = optional(value)?;
    if !LINK_RE.is_match(&trimmed) {
        errors.push(FieldError::new(field, "Must be a valid http(s) URL"));
    }
    Some(trimmed)
}

fn genres(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

pub fn validate_venue(form: &VenueForm) -> Result<NewVenue, Vec<FieldError>> {
    let mut errors = Vec::new();

    let venue = NewVenue {
        name: required("name", &form.name, &mut errors),
        city: required("city", &form.city, &mut errors),
        state: state(&form.state, &mut errors),
        address: required("address", &form.address, &mut errors),
        phone: phone(&form.phone, &mut errors),
        image_link: link("image_link", &form.image_link, &mut errors),
        facebook_link: link("facebook_link", &form.facebook_link, &mut errors),
        website: link("website", &form.website, &mut errors),
        seeking_talent: seeking_flag(&form.seeking_talent),
        seeking_description: optional(&form.seeking_description),
        genres: genres(&form.genres),
    };

    if errors.is_empty() {
        Ok(venue)
    } else {
        Err(errors)
    }
}

pub fn validate_artist(form: &ArtistForm) -> Result<NewArtist, Vec<FieldError>> {
    let mut errors = Vec::new();

    let artist = NewArtist {
        name: required("name", &form.name, &mut errors),
        city: required("city", &form.city, &mut errors),
        state: state(&form.state, &mut errors),
        phone: phone(&form.phone, &mut errors),
        image_link: link("image_link", &form.image_link, &mut errors),
        facebook_link: link("facebook_link", &form.facebook_link, &mut errors),
        website: link("website", &form.website, &mut errors),
        seeking_venue: seeking_flag(&form.seeking_venue),
        seeking_description: optional(&form.seeking_description),
        genres: genres(&form.genres),
    };

    if errors.is_empty() {
        Ok(artist)
    } else {
        Err(errors)
    }
}

fn entity_id(field: &str, value: &str, errors: &mut Vec<FieldError>) -> i32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
        return 0;
    }
    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => id,
        _ => {
            errors.push(FieldError::new(field, "Must be a positive integer id"));
            0
        }
    }
}

fn start_time(value: &str, errors: &mut Vec<FieldError>) -> DateTime<Utc> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("start_time", "This field is required"));
        return DateTime::<Utc>::UNIX_EPOCH;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc);
    }
    for format in START_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return naive.and_utc();
        }
    }
    errors.push(FieldError::new(
        "start_time",
        "Must be a datetime like 2026-06-01 20:00:00",
    ));
    DateTime::<Utc>::UNIX_EPOCH
}

pub fn validate_show(form: &ShowForm) -> Result<NewShow, Vec<FieldError>> {
    let mut errors = Vec::new();

    let show = NewShow {
        artist_id: entity_id("artist_id", &form.artist_id, &mut errors),
        venue_id: entity_id("venue_id", &form.venue_id, &mut errors),
        start_time: start_time(&form.start_time, &mut errors),
    };

    if errors.is_empty() {
        Ok(show)
    } else {
        Err(errors)
    }
}
