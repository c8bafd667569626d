use crate::math::{self, Point3};
use crate::mesh::{EditableMesh, Triangle};

/// Result of a closest triangle query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Position of the triangle in the mesh's triangle list.
    pub index: usize,
    /// The triangle itself.
    pub triangle: Triangle,
    /// Centroid of the triangle, used as its location.
    pub centroid: Point3,
    /// Squared distance from the query point to the centroid.
    pub distance_squared: f64,
}

impl TriangleHit {
    /// Euclidean distance from the query point to the centroid.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// Finds the triangle whose centroid is nearest to a point.
pub struct ClosestTriangle {
    point: Point3,
}

impl ClosestTriangle {
    /// Creates a new `ClosestTriangle` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query. Returns `None` if the mesh has no triangles.
    #[must_use]
    pub fn execute(&self, mesh: &EditableMesh) -> Option<TriangleHit> {
        mesh.triangles()
            .iter()
            .enumerate()
            .filter_map(|(index, triangle)| {
                // Stored triangles only reference live vertices.
                let centroid = mesh.centroid(triangle).ok()?;
                Some(TriangleHit {
                    index,
                    triangle: *triangle,
                    centroid,
                    distance_squared: math::distance_squared(&centroid, &self.point),
                })
            })
            .min_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tetrahedron() -> EditableMesh {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        ] {
            mesh.add_vertex_and_connect(p).unwrap();
        }
        mesh
    }

    #[test]
    fn no_triangles_gives_none() {
        let mut mesh = EditableMesh::new();
        mesh.add_vertex(Point3::origin()).unwrap();
        assert!(ClosestTriangle::new(Point3::origin()).execute(&mesh).is_none());
    }

    #[test]
    fn nearest_centroid_wins() {
        let mesh = tetrahedron();
        // Face (1, 2, 3) has centroid (1, 1, 1).
        let hit = ClosestTriangle::new(Point3::new(2.0, 2.0, 2.0))
            .execute(&mesh)
            .unwrap();
        assert_eq!(hit.triangle, Triangle::new(1, 2, 3).unwrap());
        assert_eq!(hit.index, 3);
        assert_relative_eq!(hit.centroid, Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(hit.distance_squared, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn face_on_xy_plane_is_found_from_below() {
        let mesh = tetrahedron();
        let hit = ClosestTriangle::new(Point3::new(1.0, 1.0, -1.0))
            .execute(&mesh)
            .unwrap();
        assert_eq!(hit.triangle, Triangle::new(0, 1, 2).unwrap());
        assert_relative_eq!(hit.distance(), 1.0, epsilon = 1e-12);
    }
}
