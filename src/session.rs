use glam::*;

use crate::{Candidate, CandidateHandle, Polygon, Segment, hit_test};

/// An input event for [`SelectionSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The pointer moved to the position in region coordinates.
    PointerMove(Vec2),
    /// The pointer was clicked at its latest position.
    PointerClick,
    /// The lasso was cancelled, e.g. by escape or right click.
    Cancel,
}

/// The lifecycle state of [`SelectionSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Accepting pointer events.
    #[default]
    Open,
    /// The lasso closed and the hit-test pass ran.
    Closed,
    /// The lasso was cancelled.
    Cancelled,
}

impl SessionState {
    /// Check if no more events are accepted.
    pub fn is_terminal(self) -> bool {
        self != SessionState::Open
    }
}

/// The configuration for [`SelectionSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// The closure tolerance passed to [`hit_test::is_closed`].
    pub closure_tolerance: f32,
}

impl SessionConfig {
    /// The default closure tolerance.
    pub const DEFAULT_CLOSURE_TOLERANCE: f32 = 2.0;

    /// Set the closure tolerance.
    pub fn with_closure_tolerance(mut self, closure_tolerance: f32) -> Self {
        self.closure_tolerance = closure_tolerance;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            closure_tolerance: Self::DEFAULT_CLOSURE_TOLERANCE,
        }
    }
}

/// The overlay of an open [`SelectionSession`] for the host to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay<'a> {
    /// The committed lasso vertices in drawing order.
    pub polygon: &'a [Vec2],
    /// The latest pointer position.
    pub pointer: Vec2,
    /// The candidates with their projections.
    pub candidates: &'a [Candidate],
}

impl Overlay<'_> {
    /// Get the rubber band segment from the last committed vertex to the pointer.
    pub fn preview_segment(&self) -> Option<Segment> {
        self.polygon
            .last()
            .map(|last| Segment::new(*last, self.pointer))
    }

    /// Iterate the line strip of the committed vertices followed by the pointer.
    pub fn line_strip(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.polygon
            .iter()
            .copied()
            .chain(std::iter::once(self.pointer))
    }
}

/// An interactive lasso selection.
///
/// The session accumulates lasso vertices from pointer clicks. When a click closes the lasso, the
/// candidates inside are selected once and the session becomes [`SessionState::Closed`].
#[derive(Debug, Clone)]
pub struct SelectionSession {
    /// The config.
    config: SessionConfig,
    /// The state.
    state: SessionState,
    /// The lasso.
    polygon: Polygon,
    /// The latest pointer position.
    pointer: Vec2,
    /// The snapshot of candidates.
    candidates: Vec<Candidate>,
    /// The handles selected by the hit-test pass.
    selected: Vec<CandidateHandle>,
}

impl SelectionSession {
    /// Create a new session with the default config.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self::new_with(candidates, SessionConfig::default())
    }

    /// Create a new session with all options.
    pub fn new_with(candidates: Vec<Candidate>, config: SessionConfig) -> Self {
        log::debug!("Starting lasso session with {} candidates", candidates.len());

        Self {
            config,
            state: SessionState::Open,
            polygon: Polygon::new(),
            pointer: Vec2::ZERO,
            candidates,
            selected: Vec::new(),
        }
    }

    /// Get the config.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the lasso.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Get the latest pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Get the candidates.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get the selected handles.
    ///
    /// This is empty unless the session is [`SessionState::Closed`].
    pub fn selected(&self) -> &[CandidateHandle] {
        &self.selected
    }

    /// Get the overlay to draw.
    ///
    /// Returns `None` once the session is no longer open.
    pub fn overlay(&self) -> Option<Overlay<'_>> {
        (self.state == SessionState::Open).then(|| Overlay {
            polygon: self.polygon.vertices(),
            pointer: self.pointer,
            candidates: &self.candidates,
        })
    }

    /// Handle an event, returning the state afterwards.
    pub fn handle(&mut self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::PointerMove(pos) => self.pointer_move(pos),
            SessionEvent::PointerClick => self.click(),
            SessionEvent::Cancel => self.cancel(),
        }
    }

    /// Update the pointer position.
    pub fn pointer_move(&mut self, pos: Vec2) -> SessionState {
        if self.state == SessionState::Open {
            self.pointer = pos;
        }

        self.state
    }

    /// Commit the pointer position as a lasso vertex, closing the lasso if it is closed enough.
    pub fn click(&mut self) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.polygon.push(self.pointer);
        log::debug!("Added lasso vertex {} at {}", self.polygon.len(), self.pointer);

        if hit_test::is_closed(&self.polygon, self.config.closure_tolerance) {
            self.selected = self.hit_test();
            self.state = SessionState::Closed;

            log::info!(
                "Lasso closed with {} vertices, selected {} of {} candidates",
                self.polygon.len(),
                self.selected.len(),
                self.candidates.len()
            );
        }

        self.state
    }

    /// Cancel the lasso.
    pub fn cancel(&mut self) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        log::debug!("Lasso cancelled with {} vertices", self.polygon.len());

        self.polygon.clear();
        self.state = SessionState::Cancelled;

        self.state
    }

    /// Run the hit-test pass over the candidate snapshot.
    fn hit_test(&self) -> Vec<CandidateHandle> {
        if self.polygon.is_self_intersecting() {
            log::debug!("Lasso is self-intersecting, selecting by crossing parity");
        }

        match hit_test::select_inside(&self.polygon, &self.candidates) {
            Ok(selected) => selected.into_iter().map(|c| c.handle).collect(),
            Err(e) => {
                log::error!("Lasso hit-test failed, selecting nothing: {e}");
                Vec::new()
            }
        }
    }
}
