use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/artists", get(handlers::artists::list_artists))
        .route("/artists/search", post(handlers::artists::search_artists))
        .route(
            "/artists/create",
            get(handlers::artists::create_artist_form)
                .post(handlers::artists::create_artist_submission),
        )
        .route("/artists/:id", get(handlers::artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(handlers::artists::edit_artist_form).post(handlers::artists::edit_artist_submission),
        )
        .route("/artists/:id/delete", get(handlers::artists::delete_artist))
}
