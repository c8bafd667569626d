use crate::math::{self, Point3};
use crate::mesh::EditableMesh;

/// Result of a closest vertex query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexHit {
    /// Index of the closest vertex.
    pub index: usize,
    /// Position of the closest vertex.
    pub point: Point3,
    /// Squared distance from the query point to the vertex.
    pub distance_squared: f64,
}

impl VertexHit {
    /// Euclidean distance from the query point to the vertex.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// Finds the vertex nearest to a point.
pub struct ClosestVertex {
    point: Point3,
}

impl ClosestVertex {
    /// Creates a new `ClosestVertex` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query. Returns `None` if the mesh has no vertices.
    #[must_use]
    pub fn execute(&self, mesh: &EditableMesh) -> Option<VertexHit> {
        mesh.vertices()
            .iter()
            .enumerate()
            .map(|(index, v)| VertexHit {
                index,
                point: *v,
                distance_squared: math::distance_squared(v, &self.point),
            })
            .min_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared))
    }
}
