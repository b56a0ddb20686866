//! Server-side HTML views.
//!
//! Templates are compiled into the binary and looked up by name. Every view
//! extends `layout`. Output is HTML-escaped regardless of the template name.

use std::sync::Arc;

use anyhow::Context;
use axum::response::Html;
use minijinja::{AutoEscape, Environment};
use registrar_core::AppError;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../templates/layout.html")),
    ("home", include_str!("../templates/home.html")),
    ("students", include_str!("../templates/students.html")),
    ("editStudent", include_str!("../templates/edit_student.html")),
    ("addStudent", include_str!("../templates/add_student.html")),
    ("grades", include_str!("../templates/grades.html")),
    ("lecturers", include_str!("../templates/lecturers.html")),
];

#[derive(Clone, Debug)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: C) -> Result<Html<String>, AppError> {
        let html = self
            .env
            .get_template(name)
            .and_then(|template| template.render(context))
            .context("Error rendering page")
            .map_err(AppError::internal)?;

        Ok(Html(html))
    }
}
