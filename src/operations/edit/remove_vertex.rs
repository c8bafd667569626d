use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::mesh::{EditableMesh, Triangle};

/// Removes a vertex, patches the hole and renumbers the remaining triangles.
///
/// Every triangle using the vertex is dropped. The hole is closed by adding
/// a triangle `(n1, n2, n3)` for each triple of former neighbours where all
/// three wedges `(n1, n2, v)`, `(n2, n3, v)` and `(n1, n3, v)` existed. Each
/// unordered triple is visited once, and its closing triangle is skipped only
/// when it already exists among the surviving triangles. Neighbourhoods that
/// are not a simple fan get one closing triangle per satisfied triple, which
/// can overlap; the repair is local and best effort.
///
/// Indices above the removed vertex move down by one, in the vertex sequence
/// and in every surviving triangle.
pub struct RemoveVertex {
    index: usize,
}

impl RemoveVertex {
    /// Creates a new `RemoveVertex` operation.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range. The mesh is unchanged
    /// on error.
    pub fn execute(&self, mesh: &mut EditableMesh) -> Result<()> {
        let removed = self.index;
        mesh.vertex(removed)?;

        let (wedges, mut kept): (Vec<Triangle>, Vec<Triangle>) = mesh
            .triangles()
            .iter()
            .partition(|t| t.contains(removed));

        let patch = close_hole(removed, &wedges, &kept)?;
        let patched = patch.len();
        kept.extend(patch);

        let renumbered = kept
            .iter()
            .map(|t| t.shifted_past(removed))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        mesh.commit_removal(removed, renumbered);
        debug!(
            index = removed,
            dropped = wedges.len(),
            patched,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "vertex removed"
        );
        Ok(())
    }
}

/// Triangles closing the hole left by `removed`, given the triangles that
/// used it (`wedges`) and the ones that survive (`kept`).
fn close_hole(removed: usize, wedges: &[Triangle], kept: &[Triangle]) -> Result<Vec<Triangle>> {
    let mut neighbors: Vec<usize> = Vec::new();
    for index in wedges.iter().flat_map(Triangle::indices) {
        if index != removed && !neighbors.contains(&index) {
            neighbors.push(index);
        }
    }

    let wedge_set: HashSet<Triangle> = wedges.iter().copied().collect();
    let has_wedge = |a: usize, b: usize| -> Result<bool> {
        Ok(wedge_set.contains(&Triangle::new(a, b, removed)?))
    };

    let present: HashSet<Triangle> = kept.iter().copied().collect();
    let mut patch = Vec::new();
    for (i, &n1) in neighbors.iter().enumerate() {
        for (j, &n2) in neighbors.iter().enumerate().skip(i + 1) {
            if !has_wedge(n1, n2)? {
                continue;
            }
            for &n3 in &neighbors[j + 1..] {
                if !has_wedge(n2, n3)? || !has_wedge(n1, n3)? {
                    continue;
                }
                let closing = Triangle::new(n1, n2, n3)?;
                if !present.contains(&closing) {
                    patch.push(closing);
                }
            }
        }
    }
    Ok(patch)
}
