mod mode;
mod triangle;

pub use mode::EditMode;
pub use triangle::Triangle;

use tracing::info;

use crate::error::{Result, TopologyError};
use crate::export::{ExportGeometry, ImportGeometry, MeshGeometry};
use crate::math::{self, Point3};
use crate::operations::edit::{
    AddFace, AddVertex, ConnectVertex, MoveVertex, RemoveTriangle, RemoveVertex,
};
use crate::operations::query::{ClosestTriangle, ClosestVertex, KNearestVertices};

/// Number of vertices covered by the bootstrap triangulation (a tetrahedron).
pub const BOOTSTRAP_VERTEX_LIMIT: usize = 4;

/// An editable triangle mesh: an ordered vertex sequence, a triangle
/// collection indexing into it, and the current [`EditMode`].
///
/// Vertices have no identity besides their position in the sequence. Removing
/// one shifts every higher index down by one, and the triangles are renumbered
/// in the same step, so indices stay dense (`0..vertex_count()`).
///
/// All mutation goes through the operations in [`crate::operations::edit`];
/// the methods here are shorthands for them.
#[derive(Debug, Clone, Default)]
pub struct EditableMesh {
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
    mode: EditMode,
}

impl EditableMesh {
    /// Creates a new, empty mesh in [`EditMode::Initial`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a mesh from renderer buffers. See [`ImportGeometry`].
    ///
    /// # Errors
    ///
    /// Returns an error if the buffers are malformed or repeat a position.
    pub fn from_geometry(vertices: Vec<Point3>, indices: Vec<u32>) -> Result<Self> {
        ImportGeometry::new(vertices, indices).execute()
    }

    // --- Storage access ---

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The vertex positions, indexed by vertex index.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The triangles, in insertion order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The current edit mode.
    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Returns the position of a vertex, or an error if the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidIndex`] if `index >= vertex_count()`.
    pub fn vertex(&self, index: usize) -> std::result::Result<&Point3, TopologyError> {
        self.vertices
            .get(index)
            .ok_or(TopologyError::InvalidIndex {
                kind: "vertex",
                index,
                len: self.vertices.len(),
            })
    }

    /// Returns a triangle, or an error if the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidIndex`] if `index >= triangle_count()`.
    pub fn triangle(&self, index: usize) -> std::result::Result<&Triangle, TopologyError> {
        self.triangles
            .get(index)
            .ok_or(TopologyError::InvalidIndex {
                kind: "triangle",
                index,
                len: self.triangles.len(),
            })
    }

    /// Index of the vertex at exactly `position`, if any.
    #[must_use]
    pub fn index_of(&self, position: &Point3) -> Option<usize> {
        self.vertices.iter().position(|v| v == position)
    }

    /// The corner positions of a triangle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidIndex`] if the triangle references a
    /// vertex outside this mesh.
    pub fn triangle_points(
        &self,
        triangle: &Triangle,
    ) -> std::result::Result<[Point3; 3], TopologyError> {
        let [a, b, c] = triangle.indices();
        Ok([*self.vertex(a)?, *self.vertex(b)?, *self.vertex(c)?])
    }

    /// The centroid of a triangle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidIndex`] if the triangle references a
    /// vertex outside this mesh.
    pub fn centroid(&self, triangle: &Triangle) -> std::result::Result<Point3, TopologyError> {
        Ok(math::centroid(&self.triangle_points(triangle)?))
    }

    /// Requests a mode change. Returns `false` (and changes nothing) when the
    /// current mode does not accept it, see [`EditMode::accepts`].
    pub fn set_mode(&mut self, mode: EditMode) -> bool {
        if !self.mode.accepts(mode) {
            return false;
        }
        self.switch_mode(mode);
        true
    }

    /// Drops all vertices and triangles and returns to [`EditMode::Initial`].
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.switch_mode(EditMode::Initial);
    }

    // --- Crate-internal mutation, used by the edit operations ---

    pub(crate) fn from_parts(vertices: Vec<Point3>, triangles: Vec<Triangle>) -> Self {
        let mode = if vertices.len() >= BOOTSTRAP_VERTEX_LIMIT {
            EditMode::AddNode
        } else {
            EditMode::Initial
        };
        Self {
            vertices,
            triangles,
            mode,
        }
    }

    pub(crate) fn push_vertex(&mut self, position: Point3) -> usize {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    pub(crate) fn set_vertex(&mut self, index: usize, position: Point3) -> Result<()> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(TopologyError::InvalidIndex {
                kind: "vertex",
                index,
                len,
            })?;
        *slot = position;
        Ok(())
    }

    pub(crate) fn push_triangles(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        self.triangles.extend(triangles);
    }

    pub(crate) fn take_triangle(&mut self, index: usize) -> Result<Triangle> {
        self.triangle(index)?;
        Ok(self.triangles.remove(index))
    }

    pub(crate) fn replace_triangles(&mut self, triangles: Vec<Triangle>) {
        self.triangles = triangles;
    }

    /// Removes a vertex slot and installs the already renumbered triangles.
    pub(crate) fn commit_removal(&mut self, index: usize, triangles: Vec<Triangle>) {
        self.vertices.remove(index);
        self.triangles = triangles;
        if self.vertices.is_empty() && self.mode == EditMode::DeleteNode {
            self.switch_mode(EditMode::Initial);
        }
    }

    pub(crate) fn leave_initial(&mut self) {
        if self.mode == EditMode::Initial {
            self.switch_mode(EditMode::AddNode);
        }
    }

    fn switch_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            info!(from = %self.mode, to = %mode, "edit mode changed");
            self.mode = mode;
        }
    }

    // --- Edit shorthands ---

    /// Adds a loose vertex. See [`AddVertex`].
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex already exists at `position`, or the
    /// position is not finite.
    pub fn add_vertex(&mut self, position: Point3) -> Result<usize> {
        AddVertex::new(position).execute(self)
    }

    /// Adds a vertex and connects it to the mesh. See [`ConnectVertex`].
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex already exists at `position`, or the
    /// position is not finite.
    pub fn add_vertex_and_connect(&mut self, position: Point3) -> Result<usize> {
        ConnectVertex::new(position).execute(self)
    }

    /// Moves a vertex in place. See [`MoveVertex`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the position is not finite.
    pub fn move_vertex(&mut self, index: usize, position: Point3) -> Result<()> {
        MoveVertex::new(index, position).execute(self)
    }

    /// Removes a vertex and patches the hole it leaves. See [`RemoveVertex`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_vertex(&mut self, index: usize) -> Result<()> {
        RemoveVertex::new(index).execute(self)
    }

    /// Adds a single triangle between three existing vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range or repeated.
    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) -> Result<()> {
        AddFace::new(vec![a, b, c]).execute(self).map(|_| ())
    }

    /// Removes a triangle, leaving its vertices in place. See [`RemoveTriangle`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_triangle(&mut self, index: usize) -> Result<Triangle> {
        RemoveTriangle::new(index).execute(self)
    }

    // --- Query shorthands ---

    /// Index of the vertex nearest to `position`, or `None` for an empty mesh.
    #[must_use]
    pub fn closest_vertex(&self, position: &Point3) -> Option<usize> {
        ClosestVertex::new(*position).execute(self).map(|hit| hit.index)
    }

    /// The triangle whose centroid is nearest to `position`, or `None` when
    /// there are no triangles.
    #[must_use]
    pub fn closest_triangle(&self, position: &Point3) -> Option<Triangle> {
        ClosestTriangle::new(*position)
            .execute(self)
            .map(|hit| hit.triangle)
    }

    /// Up to `k` vertex indices nearest to `position`, nearest first.
    #[must_use]
    pub fn k_nearest_vertices(&self, position: &Point3, k: usize) -> Vec<usize> {
        KNearestVertices::new(*position, k).execute(self)
    }

    /// Renderer-ready copy of the mesh. See [`ExportGeometry`].
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex index does not fit in `u32`.
    pub fn export_geometry(&self) -> Result<MeshGeometry> {
        ExportGeometry::new().execute(self)
    }
}
