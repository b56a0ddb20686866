use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_student, edit_student_form, get_students, new_student_form, update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/add", get(new_student_form).post(create_student))
        .route("/edit/{sid}", get(edit_student_form).post(update_student))
}
