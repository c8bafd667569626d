use std::fmt;

use crate::mesh::EditMode;

/// Snapshot of the session for a heads-up display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub mode: EditMode,
    pub vertices: usize,
    pub triangles: usize,
    pub selected: usize,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M: {} \n V: {} T: {} S: {}",
            self.mode, self.vertices, self.triangles, self.selected
        )
    }
}
