use crate::coords::Mat3;

use super::SceneGraph;

/// Computes each node's world transform for the given elapsed time.
///
/// Matrices come back in node order; `SceneGraph` guarantees parents precede
/// children, so a node's parent transform is always available by the time the
/// node is reached. Per node:
///
/// ```text
/// local = T(offset) * T(pivot) * R(sin(t) * amplitude) * T(-pivot)
/// world = parent_world * local        (identity parent for roots)
/// ```
///
/// Rightmost factor applies first: a node rotates about its own pivot before
/// being carried to its offset in the parent frame, and the parent's world
/// transform applies last. Swapping the rotation and offset factors would
/// orbit the node around the parent origin instead of spinning it in place.
///
/// Stateless and deterministic: nothing is cached between calls, and equal
/// inputs yield bit-identical output. Non-finite `elapsed_seconds` produces
/// garbage matrices but never panics; the next sane tick recovers.
///
/// Elapsed time arrives as `f64` and the sine is taken at that precision,
/// keeping the phase accurate after hours of uptime; only the resulting
/// angle narrows to `f32`.
pub fn world_transforms(graph: &SceneGraph, elapsed_seconds: f64) -> Vec<Mat3> {
    let phase = elapsed_seconds.sin() as f32;
    let mut out: Vec<Mat3> = Vec::with_capacity(graph.len());

    for node in graph.nodes() {
        let motion = node.motion;
        let angle = phase * motion.amplitude;

        let local = Mat3::translation(motion.offset + motion.pivot)
            * Mat3::rotation(angle)
            * Mat3::translation(-motion.pivot);

        let world = match node.parent {
            Some(parent) => out[parent.index()] * local,
            None => local,
        };
        out.push(world);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{Motion, Node, Shape, VertexRange};
    use core::f32::consts::{PI, TAU};

    const EPS: f32 = 1e-6;

    fn shape(center: Vec2) -> Shape {
        Shape {
            center,
            size: Vec2::new(0.2, 0.1),
            color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            range: VertexRange::new(0, 6),
        }
    }

    /// A rig shaped like the propeller: static root, spinning hub, two
    /// counter-spinning tips at mirrored offsets.
    fn spinner() -> SceneGraph {
        let mut g = SceneGraph::new();
        g.push(Node {
            shape: shape(Vec2::new(0.0, -0.5)),
            parent: None,
            motion: Motion::fixed(),
        });
        let hub = g.push(Node {
            shape: shape(Vec2::zero()),
            parent: None,
            motion: Motion::spin_about(Vec2::zero(), TAU),
        });
        g.push(Node {
            shape: shape(Vec2::zero()),
            parent: Some(hub),
            motion: Motion::spin_at(Vec2::new(0.3, 0.0), -5.0 * PI),
        });
        g.push(Node {
            shape: shape(Vec2::zero()),
            parent: Some(hub),
            motion: Motion::spin_at(Vec2::new(-0.3, 0.0), -5.0 * PI),
        });
        g
    }

    fn mat_approx(a: Mat3, b: Mat3, eps: f32) -> bool {
        (0..3).all(|i| (0..3).all(|j| (a.m[i][j] - b.m[i][j]).abs() < eps))
    }

    // ── identity at t = 0 ─────────────────────────────────────────────────

    #[test]
    fn zero_elapsed_reduces_to_offsets() {
        let worlds = world_transforms(&spinner(), 0.0);
        assert!(mat_approx(worlds[0], Mat3::IDENTITY, EPS));
        assert!(mat_approx(worlds[1], Mat3::IDENTITY, EPS));
        assert!(mat_approx(worlds[2], Mat3::translation(Vec2::new(0.3, 0.0)), EPS));
        assert!(mat_approx(worlds[3], Mat3::translation(Vec2::new(-0.3, 0.0)), EPS));
    }

    // ── pivot invariance ──────────────────────────────────────────────────

    #[test]
    fn spinning_node_fixes_its_pivot() {
        let pivot = Vec2::new(0.4, -0.2);
        let mut g = SceneGraph::new();
        g.push(Node {
            shape: shape(pivot),
            parent: None,
            motion: Motion::spin_about(pivot, TAU),
        });

        let worlds = world_transforms(&g, 0.5);
        let mapped = worlds[0].transform_point(pivot);
        assert!((mapped.x - pivot.x).abs() < EPS);
        assert!((mapped.y - pivot.y).abs() < EPS);
    }

    // ── mirror symmetry ───────────────────────────────────────────────────

    #[test]
    fn mirrored_children_share_rotation_blocks() {
        for t in [0.25f64, 0.5, 1.7, 3.9] {
            let worlds = world_transforms(&spinner(), t);
            let (r, l) = (worlds[2], worlds[3]);
            // Linear part identical.
            for i in 0..2 {
                for j in 0..2 {
                    assert!((r.m[i][j] - l.m[i][j]).abs() < 1e-5);
                }
            }
            // Translation columns mirror through the hub transform: the tips
            // sit at hub-rotated +/-offset.
            let hub = worlds[1];
            let expect_r = hub.transform_point(Vec2::new(0.3, 0.0));
            let expect_l = hub.transform_point(Vec2::new(-0.3, 0.0));
            assert!((r.m[0][2] - expect_r.x).abs() < 1e-5);
            assert!((r.m[1][2] - expect_r.y).abs() < 1e-5);
            assert!((l.m[0][2] - expect_l.x).abs() < 1e-5);
            assert!((l.m[1][2] - expect_l.y).abs() < 1e-5);
        }
    }

    // ── composition order regression ──────────────────────────────────────

    #[test]
    fn child_rotates_in_place_not_around_parent_origin() {
        let worlds = world_transforms(&spinner(), 0.5);
        let hub = worlds[1];

        let angle = (0.5f64.sin() as f32) * (-5.0 * PI);
        let spin_then_carry =
            hub * Mat3::translation(Vec2::new(0.3, 0.0)) * Mat3::rotation(angle);
        let carry_then_spin =
            hub * Mat3::rotation(angle) * Mat3::translation(Vec2::new(0.3, 0.0));

        assert!(mat_approx(worlds[2], spin_then_carry, 1e-5));
        // The swapped order is a different transform whenever the angle and
        // offset are both non-zero.
        assert!(!mat_approx(worlds[2], carry_then_spin, 1e-3));
    }

    // ── periodicity ───────────────────────────────────────────────────────

    #[test]
    fn transforms_repeat_with_period_two_pi() {
        let g = spinner();
        for t in [0.0f64, 0.3, 1.1] {
            let a = world_transforms(&g, t);
            let b = world_transforms(&g, t + core::f64::consts::TAU);
            for (ma, mb) in a.iter().zip(&b) {
                // sin(t + 2pi) drifts slightly under rounding; allow a loose
                // bound.
                assert!(mat_approx(*ma, *mb, 1e-4));
            }
        }
    }

    // ── long-uptime phase precision ───────────────────────────────────────

    #[test]
    fn phase_survives_hours_of_elapsed_time() {
        let g = spinner();
        // Roughly 28 hours of uptime. Wrapping the time by the period must
        // not change the transforms; that only holds when the sine is taken
        // before narrowing.
        let big = 100_000.0f64 + 0.3;
        let wrapped = big % core::f64::consts::TAU;
        let a = world_transforms(&g, big);
        let b = world_transforms(&g, wrapped);
        for (ma, mb) in a.iter().zip(&b) {
            assert!(mat_approx(*ma, *mb, 1e-4));
        }
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn equal_inputs_yield_bit_identical_output() {
        let g = spinner();
        let a = world_transforms(&g, 2.137);
        let b = world_transforms(&g, 2.137);
        for (ma, mb) in a.iter().zip(&b) {
            assert_eq!(ma.m, mb.m);
        }
    }
}
