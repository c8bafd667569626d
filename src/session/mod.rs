//! Interaction protocol between an input layer and the mesh.
//!
//! The input layer reports a held interaction as
//! [`EditSession::begin_interaction`], one [`EditSession::sample`] per tick,
//! and [`EditSession::end_interaction`] on release. What the release does
//! depends on the mesh's [`EditMode`]. Only one controller can hold an
//! interaction at a time; calls from any other controller are ignored.

mod params;
mod preview;
mod status;

pub use params::EditParams;
pub use preview::Preview;
pub use status::SessionStatus;

use tracing::{debug, trace};

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::{EditMode, EditableMesh, Triangle};
use crate::operations::edit::AddFace;
use crate::operations::query::{ClosestTriangle, ClosestVertex, TriangleHit, VertexHit};

/// Identifies the controller (hand, pointer) driving an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u32);

/// What a released interaction did to the mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The call did not come from the active controller.
    Ignored,
    /// A vertex was added at this index.
    VertexAdded(usize),
    /// The vertex at this index was removed.
    VertexRemoved(usize),
    /// This triangle was removed.
    TriangleRemoved(Triangle),
    /// This many triangles were added from the selection.
    TrianglesAdded(usize),
    /// A move ended. Carries the vertex that was held, if any.
    Released(Option<usize>),
    /// Nothing was within the grab radius.
    OutOfReach,
}

#[derive(Debug)]
struct Interaction {
    controller: ControllerId,
    held: Option<usize>,
    selection: Vec<usize>,
}

/// An [`EditableMesh`] plus the state of the interaction currently held on it.
#[derive(Debug, Default)]
pub struct EditSession {
    mesh: EditableMesh,
    params: EditParams,
    active: Option<Interaction>,
}

impl EditSession {
    /// Creates a session over an empty mesh.
    #[must_use]
    pub fn new(params: EditParams) -> Self {
        Self::with_mesh(EditableMesh::new(), params)
    }

    /// Creates a session over an existing mesh.
    #[must_use]
    pub fn with_mesh(mesh: EditableMesh, params: EditParams) -> Self {
        Self {
            mesh,
            params,
            active: None,
        }
    }

    /// The edited mesh.
    #[must_use]
    pub fn mesh(&self) -> &EditableMesh {
        &self.mesh
    }

    /// The interaction parameters.
    #[must_use]
    pub fn params(&self) -> &EditParams {
        &self.params
    }

    /// Requests a mode change, see [`EditableMesh::set_mode`].
    pub fn set_mode(&mut self, mode: EditMode) -> bool {
        self.mesh.set_mode(mode)
    }

    /// Clears the mesh and drops any held interaction.
    pub fn reset(&mut self) {
        self.active = None;
        self.mesh.reset();
    }

    /// The controller holding the current interaction, if any.
    #[must_use]
    pub fn active_controller(&self) -> Option<ControllerId> {
        self.active.as_ref().map(|a| a.controller)
    }

    /// Vertices selected so far for a new face.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        self.active.as_ref().map_or(&[], |a| a.selection.as_slice())
    }

    /// The vertex being dragged, if any.
    #[must_use]
    pub fn held_vertex(&self) -> Option<usize> {
        self.active.as_ref().and_then(|a| a.held)
    }

    /// HUD snapshot of the session.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            mode: self.mesh.mode(),
            vertices: self.mesh.vertex_count(),
            triangles: self.mesh.triangle_count(),
            selected: self.selection().len(),
        }
    }

    /// Starts an interaction. Returns `false` if another one is in progress.
    ///
    /// In [`EditMode::MoveNode`] the closest vertex within the grab radius is
    /// grabbed straight away.
    pub fn begin_interaction(&mut self, controller: ControllerId, position: Point3) -> bool {
        if self.active.is_some() {
            return false;
        }
        let held = if self.mesh.mode() == EditMode::MoveNode {
            grab(&self.mesh, &self.params, &position)
        } else {
            None
        };
        debug!(?controller, mode = %self.mesh.mode(), ?held, "interaction started");
        self.active = Some(Interaction {
            controller,
            held,
            selection: Vec::new(),
        });
        true
    }

    /// Feeds one tick of controller movement into the held interaction.
    ///
    /// Drags the held vertex in [`EditMode::MoveNode`] and grows the selection
    /// in [`EditMode::AddTriangle`]. Other modes only change on release.
    ///
    /// # Errors
    ///
    /// Returns an error if moving the held vertex fails.
    pub fn sample(&mut self, controller: ControllerId, position: Point3) -> Result<()> {
        let Some(active) = self.active.as_mut().filter(|a| a.controller == controller) else {
            return Ok(());
        };
        match self.mesh.mode() {
            EditMode::MoveNode => {
                if active.held.is_none() {
                    active.held = grab(&self.mesh, &self.params, &position);
                }
                if let Some(index) = active.held {
                    self.mesh.move_vertex(index, position)?;
                }
            }
            EditMode::AddTriangle => {
                let Some(hit) = ClosestVertex::new(position).execute(&self.mesh) else {
                    return Ok(());
                };
                if hit.distance() < self.params.interaction_distance
                    && !active.selection.contains(&hit.index)
                    && active.selection.len() < self.params.selection_limit()
                {
                    trace!(index = hit.index, "vertex selected");
                    active.selection.push(hit.index);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Ends the interaction and applies the current mode's edit at `position`.
    ///
    /// | mode | effect |
    /// |---|---|
    /// | `Initial`, `AddNodeAndFace` | add a vertex and connect it |
    /// | `AddNode` | add a loose vertex |
    /// | `AddTriangle` | turn the selection into 1 or 2 triangles |
    /// | `MoveNode` | release the held vertex |
    /// | `DeleteNode` | remove the nearer of closest vertex and closest face, if within the grab radius |
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying edit. The interaction is over
    /// either way.
    pub fn end_interaction(
        &mut self,
        controller: ControllerId,
        position: Point3,
    ) -> Result<CommitOutcome> {
        if self.active_controller() != Some(controller) {
            return Ok(CommitOutcome::Ignored);
        }
        let Some(interaction) = self.active.take() else {
            return Ok(CommitOutcome::Ignored);
        };

        let outcome = match self.mesh.mode() {
            EditMode::Initial | EditMode::AddNodeAndFace => {
                CommitOutcome::VertexAdded(self.mesh.add_vertex_and_connect(position)?)
            }
            EditMode::AddNode => CommitOutcome::VertexAdded(self.mesh.add_vertex(position)?),
            EditMode::AddTriangle => CommitOutcome::TrianglesAdded(
                AddFace::new(interaction.selection).execute(&mut self.mesh)?,
            ),
            EditMode::MoveNode => CommitOutcome::Released(interaction.held),
            EditMode::DeleteNode => self.delete_at(&position)?,
        };
        debug!(?controller, ?outcome, "interaction committed");
        Ok(outcome)
    }

    /// What the view layer should draw for the held interaction at `position`.
    #[must_use]
    pub fn preview(&self, position: Point3) -> Preview {
        let Some(active) = &self.active else {
            return Preview::Idle;
        };
        Preview::build(&self.mesh, &self.params, active.held, &active.selection, position)
    }

    fn delete_at(&mut self, position: &Point3) -> Result<CommitOutcome> {
        let outcome = match DeleteTarget::find(&self.mesh, position) {
            Some(target) if target.distance() < self.params.grab_radius() => match target {
                DeleteTarget::Vertex(hit) => {
                    self.mesh.remove_vertex(hit.index)?;
                    CommitOutcome::VertexRemoved(hit.index)
                }
                DeleteTarget::Triangle(hit) => {
                    CommitOutcome::TriangleRemoved(self.mesh.remove_triangle(hit.index)?)
                }
            },
            _ => CommitOutcome::OutOfReach,
        };
        if self.mesh.vertex_count() == 0 {
            self.mesh.set_mode(EditMode::Initial);
        }
        Ok(outcome)
    }
}

/// The element a delete at some position would hit.
#[derive(Debug, Clone, Copy)]
enum DeleteTarget {
    Vertex(VertexHit),
    Triangle(TriangleHit),
}

impl DeleteTarget {
    /// The nearer of the closest vertex and the closest face centroid. Ties go
    /// to the face.
    fn find(mesh: &EditableMesh, position: &Point3) -> Option<Self> {
        let vertex = ClosestVertex::new(*position).execute(mesh);
        let face = ClosestTriangle::new(*position).execute(mesh);
        match (vertex, face) {
            (Some(v), Some(f)) if v.distance_squared < f.distance_squared => Some(Self::Vertex(v)),
            (_, Some(f)) => Some(Self::Triangle(f)),
            (Some(v), None) => Some(Self::Vertex(v)),
            (None, None) => None,
        }
    }

    fn distance(&self) -> f64 {
        match self {
            Self::Vertex(hit) => hit.distance(),
            Self::Triangle(hit) => hit.distance(),
        }
    }

    fn location(&self) -> Point3 {
        match self {
            Self::Vertex(hit) => hit.point,
            Self::Triangle(hit) => hit.centroid,
        }
    }
}

/// Closest vertex strictly within the grab radius.
fn grab(mesh: &EditableMesh, params: &EditParams, position: &Point3) -> Option<usize> {
    ClosestVertex::new(*position)
        .execute(mesh)
        .filter(|hit| hit.distance() < params.grab_radius())
        .map(|hit| hit.index)
}
