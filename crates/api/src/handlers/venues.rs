//! Venue directory handlers: grouped listing, search, detail view, and the
//! create/edit/delete flows.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use showbill_core::{
    display,
    errors::DirectoryError,
    models::common::{DeleteReceipt, FormChoices, SearchRequest, SubmissionReceipt},
    models::venue::{
        CityGroup, VenueDetail, VenueForm, VenueListingRow, VenueSearchResponse, VenueShowEntry,
        VenueSummary,
    },
    validation,
};
use showbill_db::models::DbVenue;

use crate::{middleware::error_handling::AppError, ApiState};

/// Grouped venue directory: one group per (city, state), each venue with its
/// upcoming-show count recomputed for this request.
#[axum::debug_handler]
pub async fn list_venues(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CityGroup>>, AppError> {
    let now = Utc::now();

    let rows = showbill_db::repositories::venue::list_venue_summaries(&state.db_pool, now)
        .await
        .map_err(DirectoryError::Database)?;

    let rows = rows
        .into_iter()
        .map(|row| VenueListingRow {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();

    Ok(Json(display::group_by_locality(rows)))
}

#[axum::debug_handler]
pub async fn search_venues(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<VenueSearchResponse>, AppError> {
    let now = Utc::now();

    let matches =
        showbill_db::repositories::venue::search_venues(&state.db_pool, &payload.search_term, now)
            .await
            .map_err(DirectoryError::Database)?;

    let data: Vec<VenueSummary> = matches
        .into_iter()
        .map(|row| VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();

    Ok(Json(VenueSearchResponse {
        count: data.len(),
        data,
    }))
}

/// Venue detail view with shows partitioned into past and upcoming relative
/// to the render time.
#[axum::debug_handler]
pub async fn show_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, AppError> {
    let venue = showbill_db::repositories::venue::get_venue_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Venue with ID {} not found", id)))?;

    let shows = showbill_db::repositories::venue::get_shows_for_venue(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?;

    let now = Utc::now();
    let (past, upcoming) = display::partition_by_start(shows, now, |show| show.start_time);

    let to_entry = |show: showbill_db::models::DbShowWithArtist| VenueShowEntry {
        artist_id: show.artist_id,
        artist_name: show.artist_name,
        artist_image_link: show.artist_image_link,
        start_time: display::format_start_time(show.start_time),
    };
    let past_shows: Vec<VenueShowEntry> = past.into_iter().map(to_entry).collect();
    let upcoming_shows: Vec<VenueShowEntry> = upcoming.into_iter().map(to_entry).collect();

    let response = VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: display::format_phone(&venue.phone),
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        past_shows,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
    };

    Ok(Json(response))
}

/// Blank create form: the field choice lists for the client to render.
#[axum::debug_handler]
pub async fn create_venue_form() -> Json<FormChoices> {
    Json(validation::form_choices())
}

#[axum::debug_handler]
pub async fn create_venue_submission(
    State(state): State<Arc<ApiState>>,
    Json(form): Json<VenueForm>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    // Validate before touching the store; nothing is persisted on failure
    let venue = validation::validate_venue(&form).map_err(DirectoryError::Validation)?;

    let created = showbill_db::repositories::venue::create_venue(&state.db_pool, &venue)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: created.id,
        message: format!("Venue {} was successfully listed!", created.name),
        url: format!("/venues/{}", created.id),
    }))
}

/// Edit form pre-filled with the stored values. The phone number is shown
/// with dashes, the way it is displayed everywhere else.
#[axum::debug_handler]
pub async fn edit_venue_form(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<VenueForm>, AppError> {
    let venue = showbill_db::repositories::venue::get_venue_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Venue with ID {} not found", id)))?;

    Ok(Json(prefill_venue_form(venue)))
}

#[axum::debug_handler]
pub async fn edit_venue_submission(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    Json(form): Json<VenueForm>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    // The target row must exist before the form is worth validating
    showbill_db::repositories::venue::get_venue_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Venue with ID {} not found", id)))?;

    let venue = validation::validate_venue(&form).map_err(DirectoryError::Validation)?;

    let updated = showbill_db::repositories::venue::update_venue(&state.db_pool, id, &venue)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: updated.id,
        message: format!("Venue {} was successfully updated!", updated.name),
        url: format!("/venues/{}", updated.id),
    }))
}

/// Deletes a venue together with its shows; the repository runs both deletes
/// in one transaction.
#[axum::debug_handler]
pub async fn delete_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let venue = showbill_db::repositories::venue::get_venue_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Venue with ID {} not found", id)))?;

    showbill_db::repositories::venue::delete_venue(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(DeleteReceipt {
        deleted: true,
        message: format!("Successfully removed venue {}", venue.name),
        url: "/venues".to_string(),
    }))
}

fn prefill_venue_form(venue: DbVenue) -> VenueForm {
    VenueForm {
        name: venue.name,
        city: venue.city,
        state: venue.state,
        address: venue.address,
        phone: display::format_phone(&venue.phone),
        image_link: venue.image_link.unwrap_or_default(),
        facebook_link: venue.facebook_link.unwrap_or_default(),
        website: venue.website.unwrap_or_default(),
        seeking_talent: if venue.seeking_talent {
            "Yes".to_string()
        } else {
            "No".to_string()
        },
        seeking_description: venue.seeking_description.unwrap_or_default(),
        genres: venue.genres,
    }
}
