use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_grades;

pub fn init_grades_router() -> Router<AppState> {
    Router::new().route("/", get(get_grades))
}
