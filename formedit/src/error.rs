//! Error types for schema interpretation and value updates.

use thiserror::Error;

/// Errors raised while interpreting an editor schema against a property object.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field id was referenced that is not declared by the schema.
    #[error("unknown field `{path}`")]
    UnknownField { path: String },

    /// A `pattern` validation rule carries a regular expression that does not compile.
    #[error("invalid validation pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
