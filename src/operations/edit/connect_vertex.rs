use tracing::{debug, warn};

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::{EditableMesh, Triangle, BOOTSTRAP_VERTEX_LIMIT};
use crate::operations::query::{ClosestTriangle, KNearestVertices};

use super::AddVertex;

/// Adds a vertex and stitches it into the surface.
///
/// While the mesh is tiny the whole triangle set is rebuilt: the third vertex
/// makes one triangle, the fourth a closed tetrahedron. After that the face
/// whose centroid is nearest to the new vertex is replaced by a fan of three
/// triangles from the new vertex to its corners. Without any faces, the three
/// nearest vertices stand in for the corners.
///
/// This is a local heuristic. Planarity, orientation and manifoldness of the
/// result are not checked.
pub struct ConnectVertex {
    point: Point3,
}

impl ConnectVertex {
    /// Creates a new `ConnectVertex` operation.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the operation, returning the new vertex index.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not finite or already occupied.
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<usize> {
        let insert = AddVertex::new(self.point);
        insert.validate(mesh)?;

        let index = mesh.vertex_count();
        let count = index + 1;
        if count <= BOOTSTRAP_VERTEX_LIMIT {
            insert.execute(mesh)?;
            if let Some(triangles) = bootstrap_triangles(count)? {
                mesh.replace_triangles(triangles);
            }
            if count == BOOTSTRAP_VERTEX_LIMIT {
                mesh.leave_initial();
            }
            debug!(index, triangles = mesh.triangle_count(), "bootstrap vertex connected");
            return Ok(index);
        }

        // Both lookups run before insertion; the new vertex cannot be a target.
        let face = ClosestTriangle::new(self.point).execute(mesh);
        let corners = match &face {
            Some(hit) => hit.triangle.indices().to_vec(),
            None => KNearestVertices::new(self.point, 3).execute(mesh),
        };
        let &[a, b, c] = corners.as_slice() else {
            warn!(
                index,
                candidates = corners.len(),
                "not enough vertices to connect, adding loose vertex"
            );
            return insert.execute(mesh);
        };
        let fan = [
            Triangle::new(index, a, b)?,
            Triangle::new(index, b, c)?,
            Triangle::new(index, a, c)?,
        ];

        insert.execute(mesh)?;
        if let Some(hit) = face {
            mesh.take_triangle(hit.index)?;
        }
        mesh.push_triangles(fan);
        debug!(
            index,
            replaced_face = face.is_some(),
            triangles = mesh.triangle_count(),
            "vertex connected"
        );
        Ok(index)
    }
}

/// Full triangle set for a mesh of `count` bootstrap vertices, or `None` when
/// there are too few vertices for a face.
fn bootstrap_triangles(count: usize) -> Result<Option<Vec<Triangle>>> {
    let triangles = match count {
        3 => vec![Triangle::new(0, 1, 2)?],
        4 => vec![
            Triangle::new(0, 1, 2)?,
            Triangle::new(0, 1, 3)?,
            Triangle::new(0, 2, 3)?,
            Triangle::new(1, 2, 3)?,
        ],
        _ => return Ok(None),
    };
    Ok(Some(triangles))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::mesh::EditMode;

    fn connect_all(points: &[[f64; 3]]) -> EditableMesh {
        let mut mesh = EditableMesh::new();
        for p in points {
            ConnectVertex::new(Point3::new(p[0], p[1], p[2]))
                .execute(&mut mesh)
                .unwrap();
        }
        mesh
    }

    fn triangle_set(mesh: &EditableMesh) -> HashSet<Triangle> {
        mesh.triangles().iter().copied().collect()
    }

    const TETRAHEDRON: [[f64; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];

    #[test]
    fn two_vertices_make_no_face() {
        let mesh = connect_all(&TETRAHEDRON[..2]);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.mode(), EditMode::Initial);
    }

    #[test]
    fn third_vertex_makes_one_triangle() {
        let mesh = connect_all(&TETRAHEDRON[..3]);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles()[0], Triangle::new(0, 1, 2).unwrap());
        assert_eq!(mesh.mode(), EditMode::Initial);
    }

    #[test]
    fn fourth_vertex_closes_tetrahedron() {
        let mesh = connect_all(&TETRAHEDRON);
        assert_eq!(mesh.triangle_count(), 4);
        let expected: HashSet<Triangle> = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
            .into_iter()
            .map(|t| Triangle::from_indices(t).unwrap())
            .collect();
        assert_eq!(triangle_set(&mesh), expected);
        assert_eq!(mesh.mode(), EditMode::AddNode);
    }

    #[test]
    fn fifth_vertex_replaces_nearest_face_with_fan() {
        let mut mesh = connect_all(&TETRAHEDRON);
        // Just outside face (1, 2, 3).
        let index = mesh
            .add_vertex_and_connect(Point3::new(0.5, 0.5, 0.5))
            .unwrap();
        assert_eq!(index, 4);
        assert_eq!(mesh.triangle_count(), 6);

        let set = triangle_set(&mesh);
        assert!(!set.contains(&Triangle::new(1, 2, 3).unwrap()));
        for t in [[4, 1, 2], [4, 2, 3], [4, 1, 3]] {
            assert!(set.contains(&Triangle::from_indices(t).unwrap()));
        }
    }

    #[test]
    fn without_faces_connects_to_nearest_vertices() {
        let mut mesh = EditableMesh::new();
        for p in TETRAHEDRON {
            mesh.add_vertex(Point3::new(p[0], p[1], p[2])).unwrap();
        }
        assert_eq!(mesh.triangle_count(), 0);

        mesh.add_vertex_and_connect(Point3::new(2.0, 2.0, 2.0)).unwrap();
        // Nearest to (2, 2, 2): vertices 1, 2, 3 (equidistant), then 0.
        let expected: HashSet<Triangle> = [[4, 1, 2], [4, 2, 3], [4, 1, 3]]
            .into_iter()
            .map(|t| Triangle::from_indices(t).unwrap())
            .collect();
        assert_eq!(triangle_set(&mesh), expected);
    }

    #[test]
    fn bootstrap_rebuilds_existing_faces() {
        let mut mesh = connect_all(&TETRAHEDRON[..3]);
        mesh.remove_triangle(0).unwrap();
        assert_eq!(mesh.triangle_count(), 0);

        mesh.add_vertex_and_connect(Point3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn duplicate_leaves_mesh_untouched() {
        let mut mesh = connect_all(&TETRAHEDRON);
        let before = mesh.export_geometry().unwrap();
        assert!(mesh
            .add_vertex_and_connect(Point3::new(1.0, 0.0, 0.0))
            .is_err());
        assert_eq!(mesh.export_geometry().unwrap(), before);
    }
}
