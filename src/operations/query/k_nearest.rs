use crate::math::{self, Point3};
use crate::mesh::EditableMesh;

/// Finds up to `k` vertices nearest to a point, nearest first.
///
/// If the nearest vertex sits exactly at the query point it is skipped, so
/// querying at a vertex's own position yields its neighbours rather than
/// itself. Fewer than `k` indices come back when the mesh has fewer
/// candidates.
pub struct KNearestVertices {
    point: Point3,
    k: usize,
}

impl KNearestVertices {
    /// Creates a new `KNearestVertices` query.
    #[must_use]
    pub fn new(point: Point3, k: usize) -> Self {
        Self { point, k }
    }

    /// Executes the query, returning vertex indices ordered by distance.
    #[must_use]
    pub fn execute(&self, mesh: &EditableMesh) -> Vec<usize> {
        let vertices = mesh.vertices();
        let mut ranked: Vec<(usize, f64)> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (i, math::distance_squared(v, &self.point)))
            .collect();
        // Stable, so equal distances keep index order.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let skip = match ranked.first() {
            Some(&(i, _)) if vertices[i] == self.point => 1,
            _ => 0,
        };
        ranked
            .into_iter()
            .skip(skip)
            .take(self.k)
            .map(|(i, _)| i)
            .collect()
    }
}
