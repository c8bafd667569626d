//! Mutating operations on an [`EditableMesh`](crate::mesh::EditableMesh).
//!
//! Each operation validates everything it needs before touching the mesh, so
//! a failed call leaves the mesh exactly as it was.

mod add_face;
mod add_vertex;
mod connect_vertex;
mod move_vertex;
mod remove_triangle;
mod remove_vertex;

pub use add_face::AddFace;
pub use add_vertex::AddVertex;
pub use connect_vertex::ConnectVertex;
pub use move_vertex::MoveVertex;
pub use remove_triangle::RemoveTriangle;
pub use remove_vertex::RemoveVertex;
