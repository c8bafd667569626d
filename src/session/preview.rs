use crate::math::Point3;
use crate::mesh::{EditMode, EditableMesh};
use crate::operations::query::KNearestVertices;

use super::{DeleteTarget, EditParams};

/// Visual feedback for a held interaction, derived from the mesh without
/// changing it.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// No interaction is held.
    Idle,
    /// A loose vertex would be dropped at the cursor.
    Cursor(Point3),
    /// A vertex would be added at the cursor and linked to these positions.
    Connect { cursor: Point3, targets: Vec<Point3> },
    /// The element a release would delete, if one is within reach.
    Delete {
        cursor: Point3,
        target: Option<Point3>,
    },
    /// Vertices selected so far for a new face.
    Selection {
        cursor: Point3,
        selected: Vec<Point3>,
    },
    /// The vertex being dragged, if one has been grabbed.
    Held(Option<Point3>),
}

impl Preview {
    pub(super) fn build(
        mesh: &EditableMesh,
        params: &EditParams,
        held: Option<usize>,
        selection: &[usize],
        cursor: Point3,
    ) -> Self {
        let positions = |indices: &[usize]| -> Vec<Point3> {
            indices
                .iter()
                .filter_map(|&i| mesh.vertex(i).ok().copied())
                .collect()
        };

        match mesh.mode() {
            EditMode::Initial | EditMode::AddNodeAndFace => {
                let nearest = KNearestVertices::new(cursor, params.preview_neighbors).execute(mesh);
                Self::Connect {
                    cursor,
                    targets: positions(&nearest),
                }
            }
            EditMode::AddNode => Self::Cursor(cursor),
            EditMode::DeleteNode => Self::Delete {
                cursor,
                target: DeleteTarget::find(mesh, &cursor)
                    .filter(|t| t.distance() < params.grab_radius())
                    .map(|t| t.location()),
            },
            EditMode::AddTriangle => Self::Selection {
                cursor,
                selected: positions(selection),
            },
            EditMode::MoveNode => {
                Self::Held(held.and_then(|i| mesh.vertex(i).ok().copied()))
            }
        }
    }
}
