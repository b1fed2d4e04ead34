use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/shows", get(handlers::shows::list_shows))
        .route(
            "/shows/create",
            get(handlers::shows::create_show_form).post(handlers::shows::create_show_submission),
        )
}
