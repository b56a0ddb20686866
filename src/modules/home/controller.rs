use axum::{extract::State, response::Html};
use minijinja::context;
use registrar_core::AppError;

use crate::state::AppState;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render("home", context! {})
}

/// Liveness probe. Does not touch either store.
pub async fn health() -> &'static str {
    "OK"
}
