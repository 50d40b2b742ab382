use lasso_select::{
    Camera, CandidateHandle, Error, LassoTool, ObjectId, SelectMode, SessionEvent, ToolStatus,
    VertexId, ViewportCamera, glam::*,
};

use crate::common::{RecordingRenderer, TestContext, TestScene, given};

fn draw_lasso(tool: &mut LassoTool, scene: &mut TestScene, clicks: &[Vec2]) -> ToolStatus {
    let mut status = tool.status();
    for pos in clicks {
        tool.handle(SessionEvent::PointerMove(*pos), scene);
        status = tool.handle(SessionEvent::PointerClick, scene);
    }
    status
}

#[test]
fn test_lasso_tool_invoke_when_no_viewport_should_return_error() {
    let scene = TestScene::with_objects([vec3(5.0, 5.0, 0.0)]);

    assert_eq!(
        LassoTool::invoke(&TestContext::without_viewport(), &scene).err(),
        Some(Error::NoActiveViewport)
    );
}

#[test]
fn test_lasso_tool_invoke_should_skip_candidates_not_in_view() {
    let scene = TestScene::with_objects([
        vec3(5.0, 5.0, 0.0),
        vec3(15.0, 5.0, 0.0),
        vec3(5.0, 5.0, -1.0),
    ]);

    let tool = LassoTool::invoke(&TestContext::new(), &scene).expect("tool");

    assert_eq!(tool.status(), ToolStatus::Running);
    assert_eq!(tool.mode(), SelectMode::Objects);
    assert_eq!(
        tool.session()
            .candidates()
            .iter()
            .map(|c| c.handle)
            .collect::<Vec<_>>(),
        vec![
            CandidateHandle::Object(ObjectId(0)),
            CandidateHandle::Object(ObjectId(1)),
        ]
    );
}

#[test]
fn test_lasso_tool_when_lasso_closes_should_apply_selection_once() {
    let mut scene = TestScene::with_objects([
        vec3(5.0, 5.0, 0.0),
        vec3(15.0, 5.0, 0.0),
        vec3(2.0, 8.0, 3.0),
    ]);
    let mut tool = LassoTool::invoke(&TestContext::new(), &scene).expect("tool");

    let status = draw_lasso(&mut tool, &mut scene, &given::square_lasso_clicks());

    assert_eq!(status, ToolStatus::Finished);
    assert_eq!(
        scene.selected,
        vec![
            CandidateHandle::Object(ObjectId(0)),
            CandidateHandle::Object(ObjectId(2)),
        ]
    );

    assert_eq!(
        tool.handle(SessionEvent::PointerClick, &mut scene),
        ToolStatus::Finished
    );
    assert_eq!(scene.selected.len(), 2);
}

#[test]
fn test_lasso_tool_when_cancelled_should_not_apply_selection() {
    let mut scene = TestScene::with_objects([vec3(5.0, 5.0, 0.0)]);
    let mut tool = LassoTool::invoke(&TestContext::new(), &scene).expect("tool");

    draw_lasso(&mut tool, &mut scene, &given::square_lasso_clicks()[..2]);

    assert_eq!(
        tool.handle(SessionEvent::Cancel, &mut scene),
        ToolStatus::Cancelled
    );
    assert_eq!(
        draw_lasso(&mut tool, &mut scene, &given::square_lasso_clicks()),
        ToolStatus::Cancelled
    );
    assert!(scene.selected.is_empty());
}

#[test]
fn test_lasso_tool_when_mode_is_mesh_vertices_should_select_vertices() {
    let mut scene = TestScene {
        objects: vec![vec3(5.0, 5.0, 0.0)],
        vertices: vec![vec3(1.0, 1.0, 0.0), vec3(20.0, 1.0, 0.0), vec3(9.0, 9.0, 0.0)],
        ..Default::default()
    };
    let context = TestContext {
        mode: SelectMode::MeshVertices,
        ..TestContext::new()
    };
    let mut tool = LassoTool::invoke(&context, &scene).expect("tool");

    draw_lasso(&mut tool, &mut scene, &given::square_lasso_clicks());

    assert_eq!(
        scene.selected,
        [0, 2]
            .map(|index| CandidateHandle::Vertex(VertexId {
                mesh: ObjectId(0),
                index,
            }))
            .to_vec()
    );
}

#[test]
fn test_lasso_tool_redraw_should_only_draw_while_running() {
    let mut scene = TestScene::with_objects([vec3(5.0, 5.0, 0.0), vec3(15.0, 5.0, 0.0)]);
    let mut tool = LassoTool::invoke(&TestContext::new(), &scene).expect("tool");
    let mut renderer = RecordingRenderer::default();

    let clicks = given::square_lasso_clicks();
    for pos in &clicks {
        tool.redraw(&mut renderer);
        tool.handle(SessionEvent::PointerMove(*pos), &mut scene);
        tool.handle(SessionEvent::PointerClick, &mut scene);
    }
    tool.redraw(&mut renderer);

    assert_eq!(renderer.frames.len(), clicks.len());
    assert_eq!(
        renderer.frames.last(),
        Some(&(clicks[..4].to_vec(), clicks[3], 2))
    );
}

#[test]
fn test_lasso_tool_with_viewport_camera_should_select_projected_objects() {
    let context = TestContext {
        viewport: Some(ViewportCamera::new(
            Camera::new(0.1..100.0, std::f32::consts::FRAC_PI_2),
            UVec2::new(800, 600),
        )),
        mode: SelectMode::Objects,
    };
    let mut scene = TestScene::with_objects([
        vec3(0.0, 0.0, 10.0),
        vec3(0.0, 5.0, 10.0),
        vec3(0.0, 0.0, -10.0),
    ]);
    let mut tool = LassoTool::invoke(&context, &scene).expect("tool");
    assert_eq!(tool.session().candidates().len(), 2);

    let status = draw_lasso(
        &mut tool,
        &mut scene,
        &[
            vec2(350.0, 250.0),
            vec2(450.0, 250.0),
            vec2(450.0, 350.0),
            vec2(350.0, 350.0),
            vec2(351.0, 251.0),
        ],
    );

    assert_eq!(status, ToolStatus::Finished);
    assert_eq!(scene.selected, vec![CandidateHandle::Object(ObjectId(0))]);
}
