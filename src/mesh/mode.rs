use std::fmt;

/// Interaction state deciding how a committed interaction edits the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Bootstrap state: every commit adds a vertex and connects it, building
    /// the first triangle and then a tetrahedron.
    #[default]
    Initial,
    /// Adds a loose vertex without connecting it.
    AddNode,
    /// Adds a vertex and fans it over the nearest face.
    AddNodeAndFace,
    /// Connects 3 selected vertices into a triangle, or 4 into two.
    AddTriangle,
    /// Drags the grabbed vertex while the interaction is held.
    MoveNode,
    /// Deletes the closest vertex or face on release.
    DeleteNode,
}

impl EditMode {
    /// All modes, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Initial,
        Self::AddNode,
        Self::AddNodeAndFace,
        Self::AddTriangle,
        Self::MoveNode,
        Self::DeleteNode,
    ];

    /// Whether an explicit switch from `self` to `requested` is allowed.
    ///
    /// `Initial` can only be left explicitly for `DeleteNode`; otherwise the
    /// mesh leaves it on its own once the bootstrap shape is complete.
    #[must_use]
    pub fn accepts(self, requested: Self) -> bool {
        self != Self::Initial || requested == Self::DeleteNode
    }

    /// Returns the display name of the mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::AddNode => "AddNode",
            Self::AddNodeAndFace => "AddNodeAndFace",
            Self::AddTriangle => "AddTriangle",
            Self::MoveNode => "MoveNode",
            Self::DeleteNode => "DeleteNode",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
