//! Artist directory handlers: alphabetical listing, search, detail view, and
//! the create/edit/delete flows.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use showbill_core::{
    display,
    errors::DirectoryError,
    models::artist::{
        ArtistDetail, ArtistForm, ArtistSearchMatch, ArtistSearchResponse, ArtistShowEntry,
        ArtistSummary,
    },
    models::common::{DeleteReceipt, FormChoices, SearchRequest, SubmissionReceipt},
    validation,
};
use showbill_db::models::DbArtist;

use crate::{middleware::error_handling::AppError, ApiState};

/// Flat artist directory, sorted alphabetically by name.
#[axum::debug_handler]
pub async fn list_artists(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ArtistSummary>>, AppError> {
    let artists = showbill_db::repositories::artist::list_artists(&state.db_pool)
        .await
        .map_err(DirectoryError::Database)?;

    let data = artists
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.name,
        })
        .collect();

    Ok(Json(data))
}

#[axum::debug_handler]
pub async fn search_artists(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<ArtistSearchResponse>, AppError> {
    let now = Utc::now();

    let matches = showbill_db::repositories::artist::search_artists(
        &state.db_pool,
        &payload.search_term,
        now,
    )
    .await
    .map_err(DirectoryError::Database)?;

    let data: Vec<ArtistSearchMatch> = matches
        .into_iter()
        .map(|row| ArtistSearchMatch {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();

    Ok(Json(ArtistSearchResponse {
        count: data.len(),
        data,
    }))
}

/// Artist detail view with shows partitioned into past and upcoming relative
/// to the render time.
#[axum::debug_handler]
pub async fn show_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, AppError> {
    let artist = showbill_db::repositories::artist::get_artist_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Artist with ID {} not found", id)))?;

    let shows = showbill_db::repositories::artist::get_shows_for_artist(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?;

    let now = Utc::now();
    let (past, upcoming) = display::partition_by_start(shows, now, |show| show.start_time);

    let to_entry = |show: showbill_db::models::DbShowWithVenue| ArtistShowEntry {
        venue_id: show.venue_id,
        venue_name: show.venue_name,
        venue_image_link: show.venue_image_link,
        start_time: display::format_start_time(show.start_time),
    };
    let past_shows: Vec<ArtistShowEntry> = past.into_iter().map(to_entry).collect();
    let upcoming_shows: Vec<ArtistShowEntry> = upcoming.into_iter().map(to_entry).collect();

    let response = ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: display::format_phone(&artist.phone),
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        past_shows,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
    };

    Ok(Json(response))
}

/// Blank create form: the field choice lists for the client to render.
#[axum::debug_handler]
pub async fn create_artist_form() -> Json<FormChoices> {
    Json(validation::form_choices())
}

#[axum::debug_handler]
pub async fn create_artist_submission(
    State(state): State<Arc<ApiState>>,
    Json(form): Json<ArtistForm>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    // Validate before touching the store; nothing is persisted on failure
    let artist = validation::validate_artist(&form).map_err(DirectoryError::Validation)?;

    let created = showbill_db::repositories::artist::create_artist(&state.db_pool, &artist)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: created.id,
        message: format!("Artist {} was successfully listed!", created.name),
        url: format!("/artists/{}", created.id),
    }))
}

/// Edit form pre-filled with the stored values.
#[axum::debug_handler]
pub async fn edit_artist_form(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistForm>, AppError> {
    let artist = showbill_db::repositories::artist::get_artist_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Artist with ID {} not found", id)))?;

    Ok(Json(prefill_artist_form(artist)))
}

#[axum::debug_handler]
pub async fn edit_artist_submission(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    Json(form): Json<ArtistForm>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    // The target row must exist before the form is worth validating
    showbill_db::repositories::artist::get_artist_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Artist with ID {} not found", id)))?;

    let artist = validation::validate_artist(&form).map_err(DirectoryError::Validation)?;

    let updated = showbill_db::repositories::artist::update_artist(&state.db_pool, id, &artist)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: updated.id,
        message: format!("Artist {} was successfully updated!", updated.name),
        url: format!("/artists/{}", updated.id),
    }))
}

/// Deletes an artist together with their shows; the repository runs both
/// deletes in one transaction.
#[axum::debug_handler]
pub async fn delete_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let artist = showbill_db::repositories::artist::get_artist_by_id(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?
        .ok_or_else(|| DirectoryError::NotFound(format!("Artist with ID {} not found", id)))?;

    showbill_db::repositories::artist::delete_artist(&state.db_pool, id)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(DeleteReceipt {
        deleted: true,
        message: format!("Successfully removed artist {}", artist.name),
        url: "/artists".to_string(),
    }))
}

fn prefill_artist_form(artist: DbArtist) -> ArtistForm {
    ArtistForm {
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: display::format_phone(&artist.phone),
        image_link: artist.image_link.unwrap_or_default(),
        facebook_link: artist.facebook_link.unwrap_or_default(),
        website: artist.website.unwrap_or_default(),
        seeking_venue: if artist.seeking_venue {
            "Yes".to_string()
        } else {
            "No".to_string()
        },
        seeking_description: artist.seeking_description.unwrap_or_default(),
        genres: artist.genres,
    }
}
