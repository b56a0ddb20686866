//! # Registrar Models
//!
//! Data structures shared by the stores and the HTTP layer.
//!
//! # Modules
//!
//! - [`students`]: Student rows and the add/edit form DTOs
//! - [`grades`]: Joined grade rows and the per-student grouping
//! - [`lecturers`]: Lecturer documents from the document store

pub mod grades;
pub mod lecturers;
pub mod students;

pub use grades::{GradeEntry, GradeRow, GradesByStudent, StudentGrades, grades_for, group_grades};
pub use lecturers::Lecturer;
pub use students::{AddStudentForm, EditStudentForm, Student};
