//! This example drives a lasso selection over a generated scene from the command line.
//!
//! For example, to lasso the middle of a 5 by 5 grid of objects:
//!
//! ```sh
//! cargo run --example scripted -- -p 200,150 -p 600,150 -p 600,450 -p 200,450 -p 201,151
//! ```
//!
//! To select the vertices of the active mesh instead, add `--vertices`. To view more options, run
//! with `--help`.

use std::collections::BTreeSet;

use clap::Parser;
use colored::Colorize;
use glam::*;

use lasso_select::{
    self as ls, CandidateHandle, HostContext, LassoTool, ObjectId, Overlay, OverlayRenderer,
    SelectMode, SessionConfig, SessionEvent, ToolStatus, VertexId,
};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    Lasso select objects of a generated scene from the command line.\n\
    \n\
    Each --point is a pointer move followed by a click, in viewport region coordinates \
    with the origin at the bottom left. The lasso closes when a click lands near the first one.\
    "
)]
struct Args {
    /// The lasso click positions.
    #[arg(short, long, value_parser = parse_point, required = true)]
    point: Vec<Vec2>,

    /// The number of objects along each side of the grid.
    #[arg(short, long, default_value_t = 5)]
    grid: u32,

    /// Select the vertices of the active mesh instead of objects.
    #[arg(long)]
    vertices: bool,

    /// The closure tolerance.
    #[arg(short, long, default_value_t = SessionConfig::DEFAULT_CLOSURE_TOLERANCE)]
    tolerance: f32,

    /// The viewport size.
    #[arg(long, num_args = 2, value_delimiter = ',', default_value = "800,600")]
    size: Vec<u32>,

    /// Cancel after the last point instead of leaving the lasso open.
    #[arg(long)]
    cancel: bool,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(vec2(x, y))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let size = UVec2::new(args.size[0], args.size[1]);
    let context = Context {
        viewport: ls::ViewportCamera::new(
            ls::Camera::new(0.1..1e3, std::f32::consts::FRAC_PI_4)
                .look_at(vec3(0.0, 10.0, -10.0), Vec3::ZERO),
            size,
        ),
        mode: match args.vertices {
            true => SelectMode::MeshVertices,
            false => SelectMode::Objects,
        },
    };
    let mut scene = DemoScene::new(args.grid);

    let mut tool = match LassoTool::invoke_with(
        &context,
        &scene,
        SessionConfig::default().with_closure_tolerance(args.tolerance),
    ) {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("{}", e.to_string().yellow());
            return;
        }
    };

    let mut renderer = LogRenderer;
    let mut status = tool.status();
    for pos in args.point {
        tool.handle(SessionEvent::PointerMove(pos), &mut scene);
        tool.redraw(&mut renderer);
        status = tool.handle(SessionEvent::PointerClick, &mut scene);
    }

    if args.cancel {
        status = tool.handle(SessionEvent::Cancel, &mut scene);
    }

    match status {
        ToolStatus::Running => println!("{}", "Lasso is still open".yellow()),
        ToolStatus::Cancelled => println!("{}", "Lasso cancelled".yellow()),
        ToolStatus::Finished => {
            println!(
                "{}",
                format!("Selected {} entities", scene.selected.len()).green()
            );
            for handle in &scene.selected {
                println!("  {}", describe(handle).cyan());
            }
        }
    }
}

fn describe(handle: &CandidateHandle) -> String {
    match handle {
        CandidateHandle::Object(ObjectId(id)) => format!("object {id}"),
        CandidateHandle::Vertex(VertexId { mesh, index }) => {
            format!("vertex {index} of object {}", mesh.0)
        }
    }
}

/// The host context.
struct Context {
    viewport: ls::ViewportCamera,
    mode: SelectMode,
}

impl HostContext for Context {
    type Viewport = ls::ViewportCamera;

    fn active_viewport(&self) -> Option<&Self::Viewport> {
        Some(&self.viewport)
    }

    fn select_mode(&self) -> SelectMode {
        self.mode
    }
}

/// A grid of objects, the first one being the active mesh, a unit cube.
struct DemoScene {
    objects: Vec<Vec3>,
    selected: BTreeSet<CandidateHandle>,
}

impl DemoScene {
    fn new(grid: u32) -> Self {
        let half = (grid as f32 - 1.0) * 0.5;
        let objects = (0..grid)
            .flat_map(|x| (0..grid).map(move |z| vec3(x as f32 - half, 0.0, z as f32 - half)))
            .map(|pos| pos * 2.0)
            .collect();

        Self {
            objects,
            selected: BTreeSet::new(),
        }
    }
}

impl ls::Scene for DemoScene {
    fn enumerate_candidates(&self, mode: SelectMode) -> Vec<(CandidateHandle, Vec3)> {
        match mode {
            SelectMode::Objects => self
                .objects
                .iter()
                .enumerate()
                .map(|(i, pos)| (ObjectId(i as u64).into(), *pos))
                .collect(),
            SelectMode::MeshVertices => {
                let Some(origin) = self.objects.first() else {
                    return Vec::new();
                };

                (0..8u32)
                    .map(|i| {
                        let corner = vec3(
                            (i & 1) as f32 - 0.5,
                            ((i >> 1) & 1) as f32 - 0.5,
                            ((i >> 2) & 1) as f32 - 0.5,
                        );
                        let handle = VertexId {
                            mesh: ObjectId(0),
                            index: i,
                        };
                        (handle.into(), *origin + corner)
                    })
                    .collect()
            }
        }
    }

    fn apply_selection(&mut self, handle: CandidateHandle) {
        self.selected.insert(handle);
    }
}

/// Logs the overlay instead of drawing it.
struct LogRenderer;

impl OverlayRenderer for LogRenderer {
    fn draw_overlay(&mut self, overlay: &Overlay<'_>) {
        log::debug!(
            "Overlay: {} vertices, pointer at {}, {} candidates",
            overlay.polygon.len(),
            overlay.pointer,
            overlay.candidates.len()
        );
    }
}
