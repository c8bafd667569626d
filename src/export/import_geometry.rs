use std::collections::HashSet;

use tracing::debug;

use crate::error::{ExportError, GeometryError, Result, TopologyError};
use crate::math::{self, Point3};
use crate::mesh::{EditableMesh, Triangle};

/// Rebuilds an [`EditableMesh`] from a vertex list and a flat index buffer.
///
/// The buffer is read in groups of three. Triangles that repeat an earlier
/// one (in any winding) are collapsed, so a double-sided export loads back as
/// the original mesh. The mesh starts in
/// [`EditMode::AddNode`](crate::mesh::EditMode::AddNode) once it has four or
/// more vertices, and in `Initial` otherwise.
pub struct ImportGeometry {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
}

impl ImportGeometry {
    /// Creates a new `ImportGeometry` operation.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Executes the import.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length is not a multiple of 3, a
    /// position is repeated or not finite, or a triangle is degenerate or
    /// references a missing vertex.
    pub fn execute(&self) -> Result<EditableMesh> {
        if self.indices.len() % 3 != 0 {
            return Err(ExportError::MalformedIndexBuffer {
                len: self.indices.len(),
            }
            .into());
        }

        let mut seen = Vec::with_capacity(self.vertices.len());
        for point in &self.vertices {
            if !math::is_finite(point) {
                return Err(GeometryError::NonFinitePoint.into());
            }
            if seen.contains(point) {
                return Err(GeometryError::DuplicateVertex {
                    x: point.x,
                    y: point.y,
                    z: point.z,
                }
                .into());
            }
            seen.push(*point);
        }

        let mut unique = HashSet::new();
        let mut triangles = Vec::with_capacity(self.indices.len() / 3);
        for chunk in self.indices.chunks_exact(3) {
            let triangle = Triangle::new(chunk[0] as usize, chunk[1] as usize, chunk[2] as usize)?;
            for index in triangle.indices() {
                if index >= seen.len() {
                    return Err(TopologyError::InvalidIndex {
                        kind: "vertex",
                        index,
                        len: seen.len(),
                    }
                    .into());
                }
            }
            if unique.insert(triangle) {
                triangles.push(triangle);
            }
        }

        debug!(
            vertices = seen.len(),
            triangles = triangles.len(),
            "geometry imported"
        );
        Ok(EditableMesh::from_parts(seen, triangles))
    }
}
