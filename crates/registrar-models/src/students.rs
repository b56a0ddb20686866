//! Student models and form DTOs.
//!
//! Form fields arrive as raw strings so a rejected submission can be shown
//! back to the user exactly as typed. Validation works on the trimmed values
//! and every failing rule reports its own message.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

pub const SID_LENGTH: usize = 4;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE: i32 = 18;

pub const SID_MESSAGE: &str = "Student ID must be exactly 4 characters";
pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
pub const AGE_MESSAGE: &str = "Age must be 18 or older";

/// A row of the `student` table.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub sid: String,
    pub name: String,
    pub age: i32,
}

/// Submitted body of the add-student form.
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct AddStudentForm {
    #[serde(default)]
    #[validate(custom(function = "validate_sid"))]
    pub sid: String,
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_age"))]
    pub age: String,
}

impl AddStudentForm {
    /// Trimmed sid, trimmed name and parsed age.
    ///
    /// Returns `None` unless the form passes validation.
    pub fn to_student(&self) -> Option<Student> {
        if self.validate().is_err() {
            return None;
        }
        Some(Student {
            sid: self.sid.trim().to_string(),
            name: self.name.trim().to_string(),
            age: parse_age(&self.age)?,
        })
    }
}

/// Submitted body of the edit-student form. The sid comes from the path.
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct EditStudentForm {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_age"))]
    pub age: String,
}

impl EditStudentForm {
    /// Trimmed name and parsed age, or `None` if the form is invalid.
    pub fn to_update(&self) -> Option<(String, i32)> {
        if self.validate().is_err() {
            return None;
        }
        Some((self.name.trim().to_string(), parse_age(&self.age)?))
    }
}

pub fn parse_age(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_sid(sid: &str) -> Result<(), ValidationError> {
    if sid.trim().chars().count() != SID_LENGTH {
        return Err(invalid("sid_length", SID_MESSAGE));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(invalid("name_length", NAME_MESSAGE));
    }
    Ok(())
}

pub fn validate_age(age: &str) -> Result<(), ValidationError> {
    match parse_age(age) {
        Some(age) if age >= MIN_AGE => Ok(()),
        _ => Err(invalid("min_age", AGE_MESSAGE)),
    }
}
