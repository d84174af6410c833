//! # Mesh Errors
//!
//! Error types for mesh construction.
//!
//! ## Error Policy
//!
//! - The public `triangulate`/`combine` entry points always return a (possibly
//!   empty) `MeshBuffer`; errors surface only through the `try_*` variants and
//!   the construction helpers
//! - Errors carry the offending values for debugging

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The tessellation service rejected its input.
    #[error("Tessellation failed: {0}")]
    Tessellation(String),

    /// A stroke was requested with an unusable width.
    #[error("Invalid stroke width: {0}")]
    InvalidStrokeWidth(f32),

    /// A planar face references a point that does not exist.
    #[error("Face index {index} out of range for {vertex_count} points")]
    FaceIndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of points in the planar mesh
        vertex_count: usize,
    },

    /// A mesh buffer index references a vertex that does not exist.
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of vertices in the buffer
        vertex_count: usize,
    },

    /// A merge would produce more vertices than `u32` indices can address.
    #[error("Mesh would hold {vertex_count} vertices, more than u32 indices can address")]
    TooManyVertices {
        /// Vertex count the merge would have produced
        vertex_count: usize,
    },

    /// Invalid mesh configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates a tessellation error.
    pub fn tessellation(message: impl Into<String>) -> Self {
        Self::Tessellation(message.into())
    }
}

/// Result type alias for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::tessellation("too few points");
        assert!(err.to_string().contains("Tessellation failed"));
        assert!(err.to_string().contains("too few points"));

        let err = MeshError::IndexOutOfRange {
            index: 7,
            vertex_count: 3,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidStrokeWidth(0.0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    /// Errors cross the rayon pool, so they must be Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
