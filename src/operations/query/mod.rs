//! Read-only proximity queries.
//!
//! All queries do a full scan of the current vertices or triangles. Interactive
//! sessions keep meshes at tens to low hundreds of primitives, so nothing is
//! indexed. Ties resolve to the lowest index.

mod closest_triangle;
mod closest_vertex;
mod k_nearest;

pub use closest_triangle::{ClosestTriangle, TriangleHit};
pub use closest_vertex::{ClosestVertex, VertexHit};
pub use k_nearest::KNearestVertices;
