//! Show listing and booking handlers.
//!
//! Shows are immutable once created; there is no edit path. A booking must
//! reference an existing artist and an existing venue, checked here before
//! the insert so a broken row can never be created.

use axum::{extract::State, Json};
use std::sync::Arc;

use showbill_core::{
    display,
    errors::DirectoryError,
    models::common::SubmissionReceipt,
    models::show::{ShowEntry, ShowForm},
    validation,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Denormalized show listing, ordered by start time.
#[axum::debug_handler]
pub async fn list_shows(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ShowEntry>>, AppError> {
    let shows = showbill_db::repositories::show::list_shows(&state.db_pool)
        .await
        .map_err(DirectoryError::Database)?;

    let data = shows
        .into_iter()
        .map(|show| ShowEntry {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: display::format_start_time(show.start_time),
        })
        .collect();

    Ok(Json(data))
}

/// Blank booking form.
#[axum::debug_handler]
pub async fn create_show_form() -> Json<ShowForm> {
    Json(ShowForm::default())
}

#[axum::debug_handler]
pub async fn create_show_submission(
    State(state): State<Arc<ApiState>>,
    Json(form): Json<ShowForm>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    let show = validation::validate_show(&form).map_err(DirectoryError::Validation)?;

    // Both referenced rows must exist before the insert
    if showbill_db::repositories::artist::get_artist_by_id(&state.db_pool, show.artist_id)
        .await
        .map_err(DirectoryError::Database)?
        .is_none()
    {
        return Err(AppError(DirectoryError::UnknownReference(format!(
            "Artist with ID {} does not exist",
            show.artist_id
        ))));
    }

    if showbill_db::repositories::venue::get_venue_by_id(&state.db_pool, show.venue_id)
        .await
        .map_err(DirectoryError::Database)?
        .is_none()
    {
        return Err(AppError(DirectoryError::UnknownReference(format!(
            "Venue with ID {} does not exist",
            show.venue_id
        ))));
    }

    let created = showbill_db::repositories::show::create_show(&state.db_pool, &show)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: created.id,
        message: "Show was successfully listed!".to_string(),
        url: "/shows".to_string(),
    }))
}
