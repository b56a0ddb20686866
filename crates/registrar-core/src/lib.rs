//! # Registrar Core
//!
//! Foundational types shared by every Registrar crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use anyhow::Context;
//! use registrar_core::AppError;
//!
//! let students = store
//!     .get_all_students()
//!     .await
//!     .context("Error fetching students")
//!     .map_err(AppError::internal)?;
//! ```

pub mod errors;

pub use errors::AppError;
