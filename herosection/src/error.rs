//! Error types and result definitions for hero-section operations.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SectionError>;

/// Errors raised by registry, rendering and migration operations.
///
/// There is no fatal category here: unknown ids and variants are reported
/// through `Option`/fallbacks at the call sites that can degrade, and these
/// errors only surface where a caller explicitly asked for something that
/// cannot be produced.
#[derive(Debug, Error)]
pub enum SectionError {
    /// A section id was requested that the registry does not contain.
    #[error("unknown section `{id}`")]
    UnknownSection { id: String },

    /// Stored properties could not be deserialized into the typed model.
    #[error("invalid section properties")]
    InvalidProps(#[from] serde_json::Error),

    /// A renderer received properties for a different variant.
    #[error("variant mismatch: renderer for `{expected}` got `{found}` properties")]
    VariantMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Rendering failed for a reason other than a type mismatch.
    #[error("render failed: {reason}")]
    Render { reason: String },
}
