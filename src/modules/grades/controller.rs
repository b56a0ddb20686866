use anyhow::Context;
use axum::{extract::State, response::Html};
use minijinja::context;
use registrar_core::AppError;
use tracing::instrument;

use crate::state::AppState;

/// Every student with their grades, lowest grade first.
#[instrument(skip(state))]
pub async fn get_grades(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let grades = state
        .records
        .get_all_grades()
        .await
        .context("Error fetching grades")
        .map_err(AppError::internal)?;

    state.views.render("grades", context! { gradesData => grades })
}
