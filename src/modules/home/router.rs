use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{health, home};

pub fn init_home_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}
