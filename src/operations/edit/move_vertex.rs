use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{self, Point3};
use crate::mesh::EditableMesh;

/// Overwrites the position of one vertex. Triangles are unaffected.
///
/// Unlike [`AddVertex`](super::AddVertex), no duplicate-position check is made.
pub struct MoveVertex {
    index: usize,
    point: Point3,
}

impl MoveVertex {
    /// Creates a new `MoveVertex` operation.
    #[must_use]
    pub fn new(index: usize, point: Point3) -> Self {
        Self { index, point }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the position is not finite.
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<()> {
        mesh.vertex(self.index)?;
        if !math::is_finite(&self.point) {
            return Err(GeometryError::NonFinitePoint.into());
        }
        mesh.set_vertex(self.index, self.point)?;
        trace!(index = self.index, "vertex moved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{SculptError, TopologyError};
    use approx::assert_relative_eq;

    #[test]
    fn moves_in_place() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0)).unwrap();
        MoveVertex::new(1, Point3::new(2.0, 3.0, 4.0))
            .execute(&mut mesh)
            .unwrap();
        assert_relative_eq!(mesh.vertices()[1], Point3::new(2.0, 3.0, 4.0));
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn out_of_range_leaves_mesh_unchanged() {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ] {
            mesh.add_vertex_and_connect(p).unwrap();
        }
        let before = mesh.export_geometry().unwrap();

        let err = mesh.move_vertex(7, Point3::new(5.0, 5.0, 5.0)).unwrap_err();
        assert!(matches!(
            err,
            SculptError::Topology(TopologyError::InvalidIndex { index: 7, .. })
        ));
        assert_eq!(mesh.export_geometry().unwrap(), before);
    }

    #[test]
    fn may_land_on_another_vertex() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.move_vertex(1, Point3::new(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(mesh.vertices()[0], mesh.vertices()[1]);
    }

    #[test]
    fn infinite_target_is_rejected() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap();
        assert!(mesh
            .move_vertex(0, Point3::new(f64::INFINITY, 0.0, 0.0))
            .is_err());
        assert_relative_eq!(mesh.vertices()[0], Point3::origin());
    }
}
