use glam::*;

use crate::{CandidateHandle, Overlay, SelectMode};

/// The viewport the lasso is drawn over.
pub trait Viewport {
    /// Project a world position into region coordinates.
    ///
    /// Returns `None` if the position cannot be projected, e.g. it is behind the camera.
    fn project(&self, world: Vec3) -> Option<Vec2>;
}

/// The host scene holding the selectable entities.
pub trait Scene {
    /// Enumerate the selectable entities with their world positions.
    fn enumerate_candidates(&self, mode: SelectMode) -> Vec<(CandidateHandle, Vec3)>;

    /// Mark an entity as selected.
    fn apply_selection(&mut self, handle: CandidateHandle);
}

/// Draws the lasso overlay on top of the viewport.
pub trait OverlayRenderer {
    /// Draw the overlay.
    fn draw_overlay(&mut self, overlay: &Overlay<'_>);
}

/// The context a lasso tool is invoked in.
pub trait HostContext {
    /// The viewport type.
    type Viewport: Viewport;

    /// Get the active viewport, if the tool is invoked over one.
    fn active_viewport(&self) -> Option<&Self::Viewport>;

    /// Get what should be selected.
    fn select_mode(&self) -> SelectMode;
}
