use anyhow::Context;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;
use registrar_core::AppError;
use registrar_observability::{track_lecturer_delete_blocked, track_lecturer_deleted};
use tracing::{error, instrument};

use crate::modules::lecturers::service::{DeleteOutcome, LecturerService};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_lecturers(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let lecturers = state
        .lecturers
        .get_all_lecturers()
        .await
        .context("Error fetching lecturers")
        .map_err(AppError::internal)?;

    state.views.render("lecturers", context! { lecturers })
}

/// The lecturer list with a banner on top. The list is fetched again so the
/// page shows the current state.
async fn lecturers_with_error(state: &AppState, message: String) -> Result<Response, AppError> {
    let lecturers = state
        .lecturers
        .get_all_lecturers()
        .await
        .context("Error fetching lecturers")
        .map_err(AppError::internal)?;

    state
        .views
        .render("lecturers", context! { lecturers, error => message })
        .map(IntoResponse::into_response)
}

#[instrument(skip(state))]
pub async fn delete_lecturer(
    State(state): State<AppState>,
    Path(lid): Path<String>,
) -> Result<Response, AppError> {
    let outcome =
        LecturerService::delete_lecturer(state.records.as_ref(), state.lecturers.as_ref(), &lid)
            .await;

    match outcome {
        Ok(DeleteOutcome::Deleted) => {
            track_lecturer_deleted();
            Ok(Redirect::to("/lecturers").into_response())
        }
        Ok(DeleteOutcome::NotFound) => Ok(Redirect::to("/lecturers").into_response()),
        Ok(DeleteOutcome::HasModules) => {
            track_lecturer_delete_blocked();
            let message = format!(
                "Cannot delete Lecturer {} as he/she has associated modules",
                lid
            );
            match lecturers_with_error(&state, message).await {
                Ok(response) => Ok(response),
                Err(e) => {
                    error!(
                        lecturer_id = %lid,
                        error = %format!("{:#}", e.error),
                        "Error deleting lecturer"
                    );
                    delete_failed(&state).await
                }
            }
        }
        Err(e) => {
            error!(lecturer_id = %lid, error = %e, "Error deleting lecturer");
            delete_failed(&state).await
        }
    }
}

async fn delete_failed(state: &AppState) -> Result<Response, AppError> {
    lecturers_with_error(state, "Error deleting lecturer".to_string()).await
}
