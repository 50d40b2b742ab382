use crate::{
    Candidate, Error, HostContext, OverlayRenderer, Scene, SelectMode, SelectionSession,
    SessionConfig, SessionEvent, SessionState, Viewport,
};

/// The status of [`LassoTool`] after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolStatus {
    /// The tool is still drawing the lasso.
    Running,
    /// The lasso closed and the selection was applied.
    Finished,
    /// The lasso was cancelled.
    Cancelled,
}

impl From<SessionState> for ToolStatus {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Open => ToolStatus::Running,
            SessionState::Closed => ToolStatus::Finished,
            SessionState::Cancelled => ToolStatus::Cancelled,
        }
    }
}

/// The modal lasso select tool.
///
/// This connects a [`SelectionSession`] to the host: it snapshots the candidates when invoked,
/// forwards events and applies the selection to the [`Scene`] once the lasso closes.
#[derive(Debug)]
pub struct LassoTool {
    /// The mode the candidates were enumerated with.
    mode: SelectMode,
    /// The session.
    session: SelectionSession,
    /// Whether the selection has been applied to the scene.
    applied: bool,
}

impl LassoTool {
    /// Invoke the tool with the default config.
    pub fn invoke(context: &impl HostContext, scene: &impl Scene) -> Result<Self, Error> {
        Self::invoke_with(context, scene, SessionConfig::default())
    }

    /// Invoke the tool with all options.
    ///
    /// Returns [`Error::NoActiveViewport`] if the context has no viewport, in which case no session
    /// is started.
    pub fn invoke_with(
        context: &impl HostContext,
        scene: &impl Scene,
        config: SessionConfig,
    ) -> Result<Self, Error> {
        let Some(viewport) = context.active_viewport() else {
            log::warn!("{}", Error::NoActiveViewport);
            return Err(Error::NoActiveViewport);
        };

        let mode = context.select_mode();
        let candidates = snapshot_candidates(viewport, scene, mode);

        Ok(Self {
            mode,
            session: SelectionSession::new_with(candidates, config),
            applied: false,
        })
    }

    /// Get the select mode.
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Get the session.
    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// Get the status.
    pub fn status(&self) -> ToolStatus {
        self.session.state().into()
    }

    /// Handle an event, applying the selection to `scene` if the lasso closes.
    pub fn handle(&mut self, event: SessionEvent, scene: &mut impl Scene) -> ToolStatus {
        let state = self.session.handle(event);

        if state == SessionState::Closed && !self.applied {
            self.applied = true;

            for handle in self.session.selected() {
                scene.apply_selection(*handle);
            }
        }

        state.into()
    }

    /// Draw the overlay while the tool is running.
    pub fn redraw(&self, renderer: &mut impl OverlayRenderer) {
        if let Some(overlay) = self.session.overlay() {
            renderer.draw_overlay(&overlay);
        }
    }
}

/// Enumerate and project the candidates for `mode`.
///
/// Candidates that do not project onto the viewport are skipped.
pub fn snapshot_candidates(
    viewport: &impl Viewport,
    scene: &impl Scene,
    mode: SelectMode,
) -> Vec<Candidate> {
    let entities = scene.enumerate_candidates(mode);
    let count = entities.len();

    let candidates = entities
        .into_iter()
        .filter_map(|(handle, world)| match viewport.project(world) {
            Some(projection) => Some(Candidate { handle, projection }),
            None => {
                log::debug!("Skipping {handle:?}, {world} does not project onto the viewport");
                None
            }
        })
        .collect::<Vec<_>>();

    if candidates.len() < count {
        log::warn!(
            "{} of {count} candidates are not in view and cannot be lasso selected",
            count - candidates.len()
        );
    }

    candidates
}
