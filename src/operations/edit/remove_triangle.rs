use tracing::debug;

use crate::error::Result;
use crate::mesh::{EditableMesh, Triangle};

/// Removes one triangle. Its vertices stay in place.
pub struct RemoveTriangle {
    index: usize,
}

impl RemoveTriangle {
    /// Creates a new `RemoveTriangle` operation for the triangle at `index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the operation, returning the removed triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle index is out of range.
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<Triangle> {
        let triangle = mesh.take_triangle(self.index)?;
        debug!(
            index = self.index,
            triangle = ?triangle.indices(),
            remaining = mesh.triangle_count(),
            "triangle removed"
        );
        Ok(triangle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{SculptError, TopologyError};
    use crate::math::Point3;

    #[test]
    fn removes_only_the_face() {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ] {
            mesh.add_vertex_and_connect(p).unwrap();
        }
        let removed = RemoveTriangle::new(1).execute(&mut mesh).unwrap();
        assert_eq!(removed, Triangle::new(0, 1, 3).unwrap());
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(!mesh.triangles().contains(&removed));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut mesh = EditableMesh::new();
        assert!(matches!(
            RemoveTriangle::new(0).execute(&mut mesh),
            Err(SculptError::Topology(TopologyError::InvalidIndex {
                kind: "triangle",
                ..
            }))
        ));
    }
}
