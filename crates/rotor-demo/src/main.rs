//! Frame driver for the propeller demo.
//!
//! Each redraw: tick the clock, evaluate world transforms in hierarchy
//! order, clear to transparent, then issue one draw per shape in rig order.

use anyhow::Result;
use winit::dpi::LogicalSize;

use rotor_engine::coords::Mat3;
use rotor_engine::core::{App, AppControl, FrameCtx};
use rotor_engine::device::GpuInit;
use rotor_engine::logging::{LoggingConfig, init_logging};
use rotor_engine::paint::Color;
use rotor_engine::render::{FlatRenderer, FlatVertex};
use rotor_engine::scene::{SceneGraph, VertexRange, world_transforms};
use rotor_engine::window::{Runtime, RuntimeConfig};

mod rig;

struct PropellerApp {
    graph: SceneGraph,
    vertices: Vec<FlatVertex>,
    renderer: FlatRenderer,
}

impl App for PropellerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let worlds = world_transforms(&self.graph, ctx.time.elapsed);

        // Pair each shape's range with its world transform, in node order
        // (node order is draw order: base, crossbar, blades).
        let draws: Vec<(Mat3, VertexRange)> = self
            .graph
            .nodes()
            .iter()
            .zip(&worlds)
            .map(|(node, &world)| (world, node.shape.range))
            .collect();

        let renderer = &mut self.renderer;
        let vertices = &self.vertices;
        ctx.render(Color::transparent(), |rctx, target| {
            renderer.upload(rctx, vertices);
            renderer.render(rctx, target, &draws);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (graph, vertices) = rig::build_rig();
    log::info!(
        "propeller rig ready: {} shapes, {} vertices",
        graph.len(),
        vertices.len()
    );

    let app = PropellerApp {
        graph,
        vertices,
        renderer: FlatRenderer::new(),
    };

    Runtime::run(
        RuntimeConfig {
            title: "rotor propeller".to_string(),
            initial_size: LogicalSize::new(900.0, 900.0),
        },
        GpuInit::default(),
        app,
    )
}
