use anyhow::{Context, anyhow};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;
use registrar_core::AppError;
use registrar_db::StoreError;
use registrar_models::{AddStudentForm, EditStudentForm};
use registrar_observability::{track_student_created, track_student_updated};
use tracing::{error, instrument};

use crate::state::AppState;
use crate::validator::{HtmlForm, validation_messages};

const ADD_FIELDS: &[&str] = &["sid", "name", "age"];
const EDIT_FIELDS: &[&str] = &["name", "age"];

fn duplicate_message(sid: &str) -> String {
    format!("Student with ID {} already exists", sid)
}

#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let students = state
        .records
        .get_all_students()
        .await
        .context("Error fetching students")
        .map_err(AppError::internal)?;

    state.views.render("students", context! { students })
}

#[instrument(skip(state))]
pub async fn edit_student_form(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> Result<Html<String>, AppError> {
    let student = state
        .records
        .get_student_by_id(&sid)
        .await
        .context("Error fetching student")
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))?;

    state.views.render(
        "editStudent",
        context! { student, errors => Vec::<String>::new() },
    )
}

/// Re-renders the form with the submitted values on any failure, so the user
/// never loses what they typed.
#[instrument(skip(state, form))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(sid): Path<String>,
    HtmlForm(form): HtmlForm<EditStudentForm>,
) -> Result<Response, AppError> {
    let render = |errors: Vec<String>| {
        state
            .views
            .render(
                "editStudent",
                context! {
                    student => context! { sid => &sid, name => &form.name, age => &form.age },
                    errors,
                },
            )
            .map(IntoResponse::into_response)
    };

    let Some((name, age)) = form.to_update() else {
        return render(validation_messages(&form, EDIT_FIELDS));
    };

    match state.records.update_student(&sid, &name, age).await {
        Ok(()) => {
            track_student_updated();
            Ok(Redirect::to("/students").into_response())
        }
        Err(e) => {
            error!(sid = %sid, error = %e, "Error updating student");
            render(vec!["Error updating student".to_string()])
        }
    }
}

pub async fn new_student_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render(
        "addStudent",
        context! { student => context! {}, errors => Vec::<String>::new() },
    )
}

#[instrument(skip(state, form))]
pub async fn create_student(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<AddStudentForm>,
) -> Result<Response, AppError> {
    let render = |errors: Vec<String>| {
        state
            .views
            .render("addStudent", context! { student => &form, errors })
            .map(IntoResponse::into_response)
    };

    let Some(student) = form.to_student() else {
        return render(validation_messages(&form, ADD_FIELDS));
    };

    match state.records.get_student_by_id(&student.sid).await {
        Ok(Some(_)) => return render(vec![duplicate_message(&student.sid)]),
        Ok(None) => {}
        Err(e) => {
            error!(sid = %student.sid, error = %e, "Error checking for existing student");
            return render(vec!["Error adding student".to_string()]);
        }
    }

    match state
        .records
        .add_student(&student.sid, &student.name, student.age)
        .await
    {
        Ok(()) => {
            track_student_created();
            Ok(Redirect::to("/students").into_response())
        }
        // Inserted by someone else between the check and the insert.
        Err(StoreError::DuplicateStudent(sid)) => render(vec![duplicate_message(&sid)]),
        Err(e) => {
            error!(sid = %student.sid, error = %e, "Error adding student");
            render(vec!["Error adding student".to_string()])
        }
    }
}
