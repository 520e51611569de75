//! Core type definitions for Formwork.
//!
//! This crate defines the fundamental, template-agnostic types used
//! throughout the core:
//! - [`Generation`] — a unit's monotonically increasing version marker
//! - [`TemplateRef`] — a reference to a reusable template (url/path/version)
//! - [`Error`] / [`Result`] — the workspace error surface
//!
//! Everything that knows about schemas, fields, or units lives in
//! `formwork-schema` and `formwork-model`, not here.

mod generation;
mod template;

pub use generation::Generation;
pub use template::TemplateRef;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A unit's history has no entry for the requested generation.
    /// Recoverable: callers respond with a not-found condition.
    #[error("no history entry for generation {requested}")]
    GenerationNotFound { requested: String },

    /// A generation string could not be parsed as a number.
    #[error("invalid generation {value:?}")]
    InvalidGeneration {
        value: String,
        source: std::num::ParseIntError,
    },
}
