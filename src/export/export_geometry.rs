use crate::error::{ExportError, Result};
use crate::mesh::EditableMesh;

use super::MeshGeometry;

/// Copies the mesh into a [`MeshGeometry`] with double-sided faces.
///
/// The result only depends on the mesh contents, so exporting twice without
/// an edit in between gives identical output.
#[derive(Debug, Default)]
pub struct ExportGeometry;

impl ExportGeometry {
    /// Creates a new `ExportGeometry` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the export.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::IndexOverflow`] if a vertex index exceeds `u32::MAX`.
    pub fn execute(&self, mesh: &EditableMesh) -> Result<MeshGeometry> {
        let mut indices = Vec::with_capacity(mesh.triangle_count() * 2);
        for triangle in mesh.triangles() {
            for winding in triangle.double_sided() {
                indices.push(to_u32(winding)?);
            }
        }
        Ok(MeshGeometry {
            vertices: mesh.vertices().to_vec(),
            indices,
        })
    }
}

fn to_u32(triple: [usize; 3]) -> Result<[u32; 3]> {
    let mut out = [0_u32; 3];
    for (slot, index) in out.iter_mut().zip(triple) {
        *slot = u32::try_from(index).map_err(|_| ExportError::IndexOverflow { index })?;
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn empty_mesh_exports_nothing() {
        let geometry = ExportGeometry::new().execute(&EditableMesh::new()).unwrap();
        assert!(geometry.vertices.is_empty());
        assert!(geometry.indices.is_empty());
    }

    #[test]
    fn each_triangle_is_exported_in_both_windings() {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ] {
            mesh.add_vertex_and_connect(p).unwrap();
        }
        let geometry = ExportGeometry::new().execute(&mesh).unwrap();
        assert_eq!(geometry.vertices, mesh.vertices());
        assert_eq!(geometry.indices, vec![[0, 1, 2], [0, 2, 1]]);
        assert_eq!(geometry.flat_indices(), vec![0, 1, 2, 0, 2, 1]);
        assert_eq!(geometry.face_count(), 2);
    }

    #[test]
    fn export_is_repeatable() {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
        ] {
            mesh.add_vertex_and_connect(p).unwrap();
        }
        let first = mesh.export_geometry().unwrap();
        let second = mesh.export_geometry().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.face_count(), 2 * mesh.triangle_count());
    }
}
