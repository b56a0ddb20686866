use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_lecturer, get_lecturers};

pub fn init_lecturers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lecturers))
        .route("/delete/{lid}", get(delete_lecturer))
}
