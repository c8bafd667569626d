//! Editable triangle mesh core for interactive 3D sculpting.
//!
//! [`EditableMesh`] holds an ordered vertex list and a set of index triangles
//! and offers the edits a hand-held sculpting tool needs: drop a vertex, fan a
//! new vertex over the nearest face, drag a vertex, delete a vertex and patch
//! the hole. [`session::EditSession`] maps a begin / sample / end interaction
//! protocol onto those edits according to the current [`EditMode`].

pub mod error;
pub mod export;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod session;

pub use error::{Result, SculptError};
pub use mesh::{EditMode, EditableMesh, Triangle};
