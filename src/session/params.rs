use crate::operations::edit::AddFace;

/// Parameters controlling how interactions pick their targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditParams {
    /// Hit radius for adding a vertex to the triangle selection.
    pub interaction_distance: f64,
    /// Multiplier on `interaction_distance` giving the grab radius used for
    /// moving and deleting.
    pub grab_scale: f64,
    /// Maximum number of vertices in a triangle selection. Interactions never
    /// select more than [`AddFace::MAX_SELECTION`], whatever this is set to.
    pub max_selection: usize,
    /// Number of vertices shown as connection targets while adding.
    pub preview_neighbors: usize,
}

impl Default for EditParams {
    fn default() -> Self {
        Self {
            interaction_distance: 0.03,
            grab_scale: 2.0,
            max_selection: AddFace::MAX_SELECTION,
            preview_neighbors: 3,
        }
    }
}

impl EditParams {
    /// Radius within which a vertex or face can be grabbed or deleted.
    #[must_use]
    pub fn grab_radius(&self) -> f64 {
        self.interaction_distance * self.grab_scale
    }

    /// Sets the selection hit radius.
    #[must_use]
    pub fn with_interaction_distance(mut self, distance: f64) -> Self {
        self.interaction_distance = distance;
        self
    }

    /// Sets the grab radius multiplier.
    #[must_use]
    pub fn with_grab_scale(mut self, scale: f64) -> Self {
        self.grab_scale = scale;
        self
    }

    /// Sets the selection cap. Values above 4 are clamped, since larger
    /// selections cannot be turned into faces.
    #[must_use]
    pub fn with_max_selection(mut self, max: usize) -> Self {
        self.max_selection = max.min(AddFace::MAX_SELECTION);
        self
    }

    /// Selection cap actually applied to interactions.
    #[must_use]
    pub fn selection_limit(&self) -> usize {
        self.max_selection.min(AddFace::MAX_SELECTION)
    }

    /// Sets the number of connection targets shown while adding.
    #[must_use]
    pub fn with_preview_neighbors(mut self, k: usize) -> Self {
        self.preview_neighbors = k;
        self
    }
}
