//! The propeller rig: four rectangles and their hierarchy.
//!
//! Layout (clip space, +Y up):
//! - a static base bar standing below the origin
//! - a crossbar resting on top of the base, oscillating about its center
//! - two blades parented to the crossbar, one at each tip, counter-spinning
//!   about their own centers
//!
//! All geometry and colors are fixed here at startup; only the per-frame
//! world transforms move.

use rotor_engine::coords::Vec2;
use rotor_engine::paint::Color;
use rotor_engine::render::{FlatVertex, MeshBuilder};
use rotor_engine::scene::{Motion, Node, SceneGraph, Shape};

use std::f32::consts::{PI, TAU};

const BASE_CENTER: Vec2 = Vec2::new(0.0, -0.5);
const BASE_SIZE: Vec2 = Vec2::new(0.1, 1.0);
const CROSSBAR_SIZE: Vec2 = Vec2::new(0.6, 0.08);
const BLADE_SIZE: Vec2 = Vec2::new(0.2, 0.05);

/// Crossbar angle: sin(t) * 2π — one full turn at the oscillation peak.
const CROSSBAR_AMPLITUDE: f32 = TAU;

/// Blade angle: sin(t) * −5π — faster and opposite to the crossbar. Both
/// blades share this value; only their offset signs differ.
const BLADE_AMPLITUDE: f32 = -5.0 * PI;

fn brown() -> Color {
    Color::from_straight(0.55, 0.27, 0.07, 1.0)
}

fn white() -> Color {
    Color::from_straight(1.0, 1.0, 1.0, 1.0)
}

fn gray() -> Color {
    Color::from_straight(0.7, 0.7, 0.7, 1.0)
}

/// Builds the scene graph and the shared vertex buffer, in draw order.
///
/// Deterministic: shape order, geometry, colors and parent links never vary
/// between runs.
pub fn build_rig() -> (SceneGraph, Vec<FlatVertex>) {
    let mut mesh = MeshBuilder::new();
    let mut graph = SceneGraph::new();

    // 1. Base bar: never moves.
    graph.push(Node {
        shape: Shape {
            center: BASE_CENTER,
            size: BASE_SIZE,
            color: brown(),
            range: mesh.push_rect(BASE_CENTER, BASE_SIZE, brown()),
        },
        parent: None,
        motion: Motion::fixed(),
    });

    // 2. Crossbar: sits on the top edge of the base and spins about its own
    //    center.
    let crossbar_center = Vec2::new(0.0, BASE_CENTER.y + BASE_SIZE.y / 2.0);
    let crossbar = graph.push(Node {
        shape: Shape {
            center: crossbar_center,
            size: CROSSBAR_SIZE,
            color: white(),
            range: mesh.push_rect(crossbar_center, CROSSBAR_SIZE, white()),
        },
        parent: None,
        motion: Motion::spin_about(crossbar_center, CROSSBAR_AMPLITUDE),
    });

    // 3, 4. Blades: authored at the origin, spun about their own centers,
    //        then carried to the crossbar tips by the fixed offsets. The
    //        crossbar's transform applies last.
    let tip = CROSSBAR_SIZE.x / 2.0;
    for offset in [Vec2::new(tip, 0.0), Vec2::new(-tip, 0.0)] {
        graph.push(Node {
            shape: Shape {
                center: Vec2::zero(),
                size: BLADE_SIZE,
                color: gray(),
                range: mesh.push_rect(Vec2::zero(), BLADE_SIZE, gray()),
            },
            parent: Some(crossbar),
            motion: Motion::spin_at(offset, BLADE_AMPLITUDE),
        });
    }

    (graph, mesh.into_vertices())
}
