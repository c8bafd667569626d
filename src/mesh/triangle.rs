use std::hash::{Hash, Hasher};

use crate::error::TopologyError;

/// A face of the mesh, stored as three distinct vertex indices.
///
/// Equality and hashing ignore the order of the indices, so `(0, 1, 2)` and
/// `(2, 0, 1)` are the same triangle. The stored order is kept for export.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    indices: [usize; 3],
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DegenerateTriangle`] if any two indices are equal.
    pub fn new(a: usize, b: usize, c: usize) -> Result<Self, TopologyError> {
        if a == b || a == c || b == c {
            return Err(TopologyError::DegenerateTriangle { indices: [a, b, c] });
        }
        Ok(Self { indices: [a, b, c] })
    }

    /// Creates a triangle from an index triple.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DegenerateTriangle`] if any two indices are equal.
    pub fn from_indices(indices: [usize; 3]) -> Result<Self, TopologyError> {
        Self::new(indices[0], indices[1], indices[2])
    }

    /// Returns the three vertex indices in stored order.
    #[must_use]
    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    /// Returns `true` if the triangle uses the given vertex.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Both windings of the triangle, so single-sided renderers draw the face
    /// from either side.
    #[must_use]
    pub fn double_sided(&self) -> [[usize; 3]; 2] {
        let [a, b, c] = self.indices;
        [[a, b, c], [a, c, b]]
    }

    /// Renumbers the triangle after vertex `removed` has been deleted from the
    /// vertex sequence: every index above it moves down by one.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DanglingIndex`] if the triangle still uses `removed`.
    pub fn shifted_past(&self, removed: usize) -> Result<Self, TopologyError> {
        if self.contains(removed) {
            return Err(TopologyError::DanglingIndex { index: removed });
        }
        Ok(Self {
            indices: self.indices.map(|i| if i > removed { i - 1 } else { i }),
        })
    }

    fn sorted(&self) -> [usize; 3] {
        let mut sorted = self.indices;
        sorted.sort_unstable();
        sorted
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}
