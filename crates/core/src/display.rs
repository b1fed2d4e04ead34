//! Pure view shaping: formatting and grouping of stored rows into the
//! display-ready structures the templates (or any other renderer) consume.

use chrono::{DateTime, Utc};

use crate::models::venue::{CityGroup, VenueListingRow, VenueSummary};

/// Formats a stored 10-digit phone number as NNN-NNN-NNNN.
///
/// Storage holds raw digits; the dashes exist only for display. A value that
/// is not exactly 10 digits is returned as stored.
pub fn format_phone(phone: &str) -> String {
    if phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &phone[..3], &phone[3..6], &phone[6..])
    } else {
        phone.to_string()
    }
}

/// Display format for show start times, e.g. "Mon Jun 01, 2026 7:30PM".
pub fn format_start_time(start: DateTime<Utc>) -> String {
    start.format("%a %b %d, %Y %-I:%M%p").to_string()
}

/// Splits items into (past, upcoming) relative to `now`.
///
/// An item whose start time equals `now` exactly lands in neither bucket.
pub fn partition_by_start<T, F>(items: Vec<T>, now: DateTime<Utc>, start: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();

    for item in items {
        let start_time = start(&item);
        if start_time < now {
            past.push(item);
        } else if start_time > now {
            upcoming.push(item);
        }
    }

    (past, upcoming)
}

/// Groups venue listing rows into an ordered sequence of (city, state) groups.
///
/// Groups are ordered by city then state; venues within a group keep
/// insertion (id) order.
pub fn group_by_locality(mut rows: Vec<VenueListingRow>) -> Vec<CityGroup> {
    rows.sort_by(|a, b| {
        (a.city.as_str(), a.state.as_str(), a.id).cmp(&(b.city.as_str(), b.state.as_str(), b.id))
    });

    let mut groups: Vec<CityGroup> = Vec::new();
    for row in rows {
        let needs_new_group = match groups.last() {
            Some(group) => group.city != row.city || group.state != row.state,
            None => true,
        };
        if needs_new_group {
            groups.push(CityGroup {
                city: row.city.clone(),
                state: row.state.clone(),
                venues: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.venues.push(VenueSummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.num_upcoming_shows,
            });
        }
    }

    groups
}
