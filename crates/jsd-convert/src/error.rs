//! Error types for scene conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a scene to a document.
///
/// Missing or unrecognized optional data (materials, world nodes) is never an
/// error; it is recovered locally with defaults. Structural geometry problems
/// abort the whole conversion so that no partial document escapes.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A face with fewer than 3 vertices.
    ///
    /// Silently skipping such a face would desynchronize vertex and face
    /// indices, so the mesh is rejected instead.
    #[error("degenerate face {face} in object '{object}': fewer than 3 vertices")]
    DegenerateFace {
        /// Name of the offending object.
        object: String,
        /// Index of the offending face in the input mesh.
        face: usize,
    },

    /// A face references a vertex index outside the mesh's vertex list.
    #[error("face {face} in object '{object}' references missing vertex {vertex}")]
    VertexOutOfRange {
        /// Name of the offending object.
        object: String,
        /// Index of the offending face in the input mesh.
        face: usize,
        /// The out-of-range vertex index.
        vertex: u32,
    },

    /// A face references a material slot outside the mesh's slot list.
    ///
    /// Letting the index through would emit a `mat_id` that no entry in the
    /// object's `materials` backs, which consumers index directly.
    #[error("face {face} in object '{object}' references missing material slot {material}")]
    MaterialOutOfRange {
        /// Name of the offending object.
        object: String,
        /// Index of the offending face in the input mesh.
        face: usize,
        /// The out-of-range material slot index.
        material: u32,
    },
}
