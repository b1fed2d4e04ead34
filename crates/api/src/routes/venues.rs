use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/venues", get(handlers::venues::list_venues))
        .route("/venues/search", post(handlers::venues::search_venues))
        .route(
            "/venues/create",
            get(handlers::venues::create_venue_form).post(handlers::venues::create_venue_submission),
        )
        .route("/venues/:id", get(handlers::venues::show_venue))
        .route(
            "/venues/:id/edit",
            get(handlers::venues::edit_venue_form).post(handlers::venues::edit_venue_submission),
        )
        .route("/venues/:id/delete", get(handlers::venues::delete_venue))
}
