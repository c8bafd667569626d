//! Conversion between the editable mesh and renderer-style buffers.

mod export_geometry;
mod import_geometry;

pub use export_geometry::ExportGeometry;
pub use import_geometry::ImportGeometry;

use crate::math::Point3;

/// Renderer-ready geometry: positions plus index triples.
///
/// Every mesh triangle appears twice, once per winding, so renderers that cull
/// back faces still draw it from both sides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshGeometry {
    /// Vertex positions, indexed by vertex index.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines one rendered face).
    pub indices: Vec<[u32; 3]>,
}

impl MeshGeometry {
    /// The index triples flattened into a single buffer.
    #[must_use]
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    /// Number of rendered faces (twice the number of mesh triangles).
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.indices.len()
    }
}
