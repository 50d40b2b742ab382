use lasso_select::{
    CandidateHandle, HostContext, ObjectId, Overlay, OverlayRenderer, Scene, SelectMode, VertexId,
    Viewport, glam::*,
};

/// Projects by dropping Z, points with negative Z are behind the viewer.
pub struct TestViewport;

impl Viewport for TestViewport {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        (world.z >= 0.0).then(|| world.xy())
    }
}

pub struct TestContext<V: Viewport = TestViewport> {
    pub viewport: Option<V>,
    pub mode: SelectMode,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            viewport: Some(TestViewport),
            mode: SelectMode::Objects,
        }
    }

    pub fn without_viewport() -> Self {
        Self {
            viewport: None,
            mode: SelectMode::Objects,
        }
    }
}

impl<V: Viewport> HostContext for TestContext<V> {
    type Viewport = V;

    fn active_viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    fn select_mode(&self) -> SelectMode {
        self.mode
    }
}

#[derive(Debug, Default)]
pub struct TestScene {
    pub objects: Vec<Vec3>,
    pub vertices: Vec<Vec3>,
    pub selected: Vec<CandidateHandle>,
}

impl TestScene {
    pub fn with_objects(objects: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Scene for TestScene {
    fn enumerate_candidates(&self, mode: SelectMode) -> Vec<(CandidateHandle, Vec3)> {
        match mode {
            SelectMode::Objects => self
                .objects
                .iter()
                .enumerate()
                .map(|(i, pos)| (ObjectId(i as u64).into(), *pos))
                .collect(),
            SelectMode::MeshVertices => self
                .vertices
                .iter()
                .enumerate()
                .map(|(i, pos)| {
                    let handle = VertexId {
                        mesh: ObjectId(0),
                        index: i as u32,
                    };
                    (handle.into(), *pos)
                })
                .collect(),
        }
    }

    fn apply_selection(&mut self, handle: CandidateHandle) {
        self.selected.push(handle);
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(Vec<Vec2>, Vec2, usize)>,
}

impl OverlayRenderer for RecordingRenderer {
    fn draw_overlay(&mut self, overlay: &Overlay<'_>) {
        self.frames.push((
            overlay.polygon.to_vec(),
            overlay.pointer,
            overlay.candidates.len(),
        ));
    }
}
