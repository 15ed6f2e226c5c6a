//! Error types for deformation operations.

use thiserror::Error;

/// Result type alias for deformation operations.
pub type DeformResult<T> = Result<T, DeformError>;

/// Errors that can occur while preparing or running a deformation.
#[derive(Debug, Error)]
pub enum DeformError {
    /// Displacement field length differs from the vertex count.
    #[error("displacement field has {actual} vectors but geometry has {expected} vertices")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The named displacement field is absent from the field set.
    #[error("displacement field {name:?} not found (available: {available:?})")]
    MissingField {
        name: String,
        available: Vec<String>,
    },

    /// A flat buffer length is not a multiple of 3.
    #[error("flat {what} buffer has length {len}, not a multiple of 3")]
    RaggedBuffer { what: &'static str, len: usize },
}
