use thiserror::Error;

/// Top-level error type for the sculpting mesh core.
#[derive(Debug, Error)]
pub enum SculptError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to vertex positions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a vertex already exists at ({x}, {y}, {z})")]
    DuplicateVertex { x: f64, y: f64, z: f64 },

    #[error("position has a non-finite coordinate")]
    NonFinitePoint,
}

/// Errors related to vertex and triangle indices.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("{kind} index {index} is out of range (count {len})")]
    InvalidIndex {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("triangle {indices:?} repeats a vertex index")]
    DegenerateTriangle { indices: [usize; 3] },

    #[error("triangle still references removed vertex {index}")]
    DanglingIndex { index: usize },

    #[error("selection of {len} vertices cannot form triangles (at most 4)")]
    SelectionTooLarge { len: usize },
}

/// Errors related to converting between the editable mesh and renderer buffers.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("vertex index {index} does not fit in a 32-bit index buffer")]
    IndexOverflow { index: usize },

    #[error("index buffer length {len} is not a multiple of 3")]
    MalformedIndexBuffer { len: usize },
}

/// Convenience type alias for results using [`SculptError`].
pub type Result<T> = std::result::Result<T, SculptError>;
