use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{self, Point3};
use crate::mesh::{EditableMesh, BOOTSTRAP_VERTEX_LIMIT};

/// Appends a loose vertex to the mesh. No triangles are created.
pub struct AddVertex {
    point: Point3,
}

impl AddVertex {
    /// Creates a new `AddVertex` operation.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Checks that the point may be inserted into `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinitePoint`] for NaN or infinite
    /// coordinates, and [`GeometryError::DuplicateVertex`] if a vertex already
    /// sits at exactly this position.
    pub fn validate(&self, mesh: &EditableMesh) -> Result<()> {
        if !math::is_finite(&self.point) {
            return Err(GeometryError::NonFinitePoint.into());
        }
        if mesh.index_of(&self.point).is_some() {
            return Err(GeometryError::DuplicateVertex {
                x: self.point.x,
                y: self.point.y,
                z: self.point.z,
            }
            .into());
        }
        Ok(())
    }

    /// Executes the operation, returning the new vertex index.
    ///
    /// # Errors
    ///
    /// See [`AddVertex::validate`].
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<usize> {
        self.validate(mesh)?;
        let index = mesh.push_vertex(self.point);
        if mesh.vertex_count() > BOOTSTRAP_VERTEX_LIMIT {
            mesh.leave_initial();
        }
        debug!(index, vertices = mesh.vertex_count(), "vertex added");
        Ok(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SculptError;
    use crate::mesh::EditMode;

    #[test]
    fn returns_sequential_indices() {
        let mut mesh = EditableMesh::new();
        assert_eq!(AddVertex::new(Point3::new(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap(), 0);
        assert_eq!(AddVertex::new(Point3::new(1.0, 0.0, 0.0)).execute(&mut mesh).unwrap(), 1);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap();
        let err = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            SculptError::Geometry(GeometryError::DuplicateVertex { .. })
        ));
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn near_duplicate_is_a_new_vertex() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Point3::new(0.0, 0.0, 1e-9)).unwrap();
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn nan_is_rejected() {
        let mut mesh = EditableMesh::new();
        let err = mesh.add_vertex(Point3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            SculptError::Geometry(GeometryError::NonFinitePoint)
        ));
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn leaves_initial_past_bootstrap() {
        let mut mesh = EditableMesh::new();
        for i in 0..4 {
            mesh.add_vertex(Point3::new(f64::from(i), 0.0, 0.0)).unwrap();
        }
        assert_eq!(mesh.mode(), EditMode::Initial);
        mesh.add_vertex(Point3::new(4.0, 0.0, 0.0)).unwrap();
        assert_eq!(mesh.mode(), EditMode::AddNode);
    }
}
