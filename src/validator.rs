use anyhow::anyhow;
use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use registrar_core::AppError;

/// Messages for the failing `fields`, in the order given.
///
/// `ValidationErrors` is keyed by a hash map, so the field order is supplied by
/// the caller to keep the messages stable on the page.
pub fn format_errors(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(*field).map(|errors| (*field, errors)))
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

/// Every validation message for `value`; empty when it is valid.
pub fn validation_messages<T: Validate>(value: &T, fields: &[&str]) -> Vec<String> {
    match value.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => format_errors(&errors, fields),
    }
}

/// A url-encoded form body.
///
/// Unlike a JSON API, a rejected submission is re-rendered with its errors, so
/// validation is left to the handler. Only bodies that cannot be decoded at
/// all are rejected here.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlForm<T>(pub T);

impl<T, S> FromRequest<S> for HtmlForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                FormRejection::InvalidFormContentType(_) => AppError::bad_request(anyhow!(
                    "Expected 'Content-Type: application/x-www-form-urlencoded'"
                )),
                _ => AppError::bad_request(anyhow!("Invalid form submission")),
            })?;

        Ok(HtmlForm(value))
    }
}
