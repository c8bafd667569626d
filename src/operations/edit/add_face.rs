use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::mesh::{EditableMesh, Triangle};

/// Connects a selection of existing vertices into triangles.
///
/// Three vertices make one triangle. Four make a quad split into the first
/// three, `(s0, s1, s2)`, and `(s0, s2, s3)` sharing the `s0`-`s2` edge.
/// Fewer than three is a no-op.
pub struct AddFace {
    selection: Vec<usize>,
}

impl AddFace {
    /// Largest selection that can be turned into faces.
    pub const MAX_SELECTION: usize = 4;

    /// Creates a new `AddFace` operation from selected vertex indices.
    #[must_use]
    pub fn new(selection: Vec<usize>) -> Self {
        Self { selection }
    }

    /// Executes the operation, returning the number of triangles added.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection has more than four vertices, an index
    /// is out of range, or an index is repeated.
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<usize> {
        let triangles = match self.selection[..] {
            [a, b, c] => vec![Triangle::new(a, b, c)?],
            [a, b, c, d] => vec![Triangle::new(a, b, c)?, Triangle::new(a, c, d)?],
            [] | [_] | [_, _] => return Ok(0),
            _ => {
                return Err(TopologyError::SelectionTooLarge {
                    len: self.selection.len(),
                }
                .into())
            }
        };
        for &index in &self.selection {
            mesh.vertex(index)?;
        }

        let added = triangles.len();
        mesh.push_triangles(triangles);
        debug!(
            selection = ?self.selection,
            added,
            triangles = mesh.triangle_count(),
            "faces added"
        );
        Ok(added)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SculptError;
    use crate::math::Point3;

    fn square() -> EditableMesh {
        let mut mesh = EditableMesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ] {
            mesh.add_vertex(p).unwrap();
        }
        mesh
    }

    #[test]
    fn three_make_one_triangle() {
        let mut mesh = square();
        assert_eq!(AddFace::new(vec![0, 1, 2]).execute(&mut mesh).unwrap(), 1);
        assert_eq!(mesh.triangles(), &[Triangle::new(0, 1, 2).unwrap()]);
    }

    #[test]
    fn four_make_a_split_quad() {
        let mut mesh = square();
        assert_eq!(AddFace::new(vec![0, 1, 2, 3]).execute(&mut mesh).unwrap(), 2);
        assert_eq!(mesh.triangles()[0].indices(), [0, 1, 2]);
        assert_eq!(mesh.triangles()[1].indices(), [0, 2, 3]);
    }

    #[test]
    fn short_selection_is_a_no_op() {
        let mut mesh = square();
        assert_eq!(AddFace::new(vec![0, 1]).execute(&mut mesh).unwrap(), 0);
        assert_eq!(AddFace::new(Vec::new()).execute(&mut mesh).unwrap(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn invalid_selections_are_rejected() {
        let mut mesh = square();
        assert!(matches!(
            AddFace::new(vec![0, 1, 9]).execute(&mut mesh),
            Err(SculptError::Topology(TopologyError::InvalidIndex { index: 9, .. }))
        ));
        assert!(matches!(
            AddFace::new(vec![0, 2, 2]).execute(&mut mesh),
            Err(SculptError::Topology(TopologyError::DegenerateTriangle { .. }))
        ));
        assert!(matches!(
            AddFace::new(vec![0, 1, 2, 3, 0]).execute(&mut mesh),
            Err(SculptError::Topology(TopologyError::SelectionTooLarge { len: 5 }))
        ));
        // A quad whose second half is degenerate adds nothing at all.
        assert!(AddFace::new(vec![0, 1, 2, 0]).execute(&mut mesh).is_err());
        assert_eq!(mesh.triangle_count(), 0);
    }
}
