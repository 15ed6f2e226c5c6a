//! Error types for surface reconstruction.

use deform_core::DeformError;
use thiserror::Error;

/// Result type alias for surface reconstruction.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while rebuilding a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Field resolution or displacement failed.
    #[error(transparent)]
    Deform(#[from] DeformError),
}
