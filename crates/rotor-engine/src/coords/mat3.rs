use core::ops::Mul;

use super::Vec2;

/// 3x3 affine transform over 2D homogeneous coordinates.
///
/// Storage is row-major (`m[row][col]`). Points are column vectors:
/// `v' = M * v`, so in a product `a * b` the right-hand factor applies first.
/// Every constructor keeps the bottom row `(0, 0, 1)`, and affine maps are
/// closed under multiplication, so products of constructors stay affine.
///
/// Composition is associative but not commutative; callers must order
/// factors deliberately (rightmost first).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Translation by `t`.
    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Mat3 {
            m: [
                [1.0, 0.0, t.x],
                [0.0, 1.0, t.y],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Counter-clockwise rotation about the origin, in radians.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Mat3 {
            m: [
                [c, -s, 0.0],
                [s, c, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Non-uniform scale about the origin.
    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Mat3 {
            m: [
                [sx, 0.0, 0.0],
                [0.0, sy, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Applies the transform to a point (homogeneous w = 1).
    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.m
            .iter()
            .all(|row| row.iter().all(|v| v.is_finite()))
    }

    /// GPU layout for a WGSL `mat3x3<f32>` uniform: column-major with each
    /// column padded to 16 bytes (three vec4-sized columns, 48 bytes total).
    #[inline]
    pub fn to_gpu(self) -> [f32; 12] {
        let m = self.m;
        [
            m[0][0], m[1][0], m[2][0], 0.0,
            m[0][1], m[1][1], m[2][1], 0.0,
            m[0][2], m[1][2], m[2][2], 0.0,
        ]
    }
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Mat3::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    /// Composes two transforms: `(a * b).transform_point(p)` equals
    /// `a.transform_point(b.transform_point(p))`.
    fn mul(self, rhs: Mat3) -> Mat3 {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [[0.0f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Mat3 { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-6;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn mat_approx(a: Mat3, b: Mat3) -> bool {
        (0..3).all(|i| (0..3).all(|j| (a.m[i][j] - b.m[i][j]).abs() < EPS))
    }

    // ── identity / composition law ────────────────────────────────────────

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = Mat3::translation(Vec2::new(3.0, -1.0)) * Mat3::rotation(0.7);
        assert!(mat_approx(Mat3::IDENTITY * m, m));
        assert!(mat_approx(m * Mat3::IDENTITY, m));
    }

    #[test]
    fn identity_fixes_points() {
        let p = Vec2::new(-2.5, 4.0);
        assert_eq!(Mat3::IDENTITY.transform_point(p), p);
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn translation_moves_points() {
        let m = Mat3::translation(Vec2::new(1.0, -2.0));
        assert!(approx(m.transform_point(Vec2::new(0.5, 0.5)), Vec2::new(1.5, -1.5)));
    }

    #[test]
    fn rotation_quarter_turn_is_ccw() {
        let m = Mat3::rotation(FRAC_PI_2);
        // +X maps to +Y under a counter-clockwise quarter turn.
        assert!(approx(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
        assert!(approx(m.transform_point(Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn scale_stretches_axes_independently() {
        let m = Mat3::scale(2.0, 0.5);
        assert!(approx(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 0.5)));
    }

    // ── composition order ─────────────────────────────────────────────────

    #[test]
    fn product_applies_right_factor_first() {
        let r = Mat3::rotation(FRAC_PI_2);
        let t = Mat3::translation(Vec2::new(1.0, 0.0));

        // t * r: rotate about the origin first, then translate.
        let p = (t * r).transform_point(Vec2::new(1.0, 0.0));
        assert!(approx(p, Vec2::new(1.0, 1.0)));

        // r * t: translate first, then rotate the displaced point.
        let q = (r * t).transform_point(Vec2::new(1.0, 0.0));
        assert!(approx(q, Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn translation_and_rotation_do_not_commute() {
        let r = Mat3::rotation(0.9);
        let t = Mat3::translation(Vec2::new(0.3, 0.0));
        assert!(!mat_approx(t * r, r * t));
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Mat3::rotation(0.4);
        let b = Mat3::translation(Vec2::new(-1.0, 2.0));
        let p = Vec2::new(0.7, -0.3);
        assert!(approx(
            (a * b).transform_point(p),
            a.transform_point(b.transform_point(p)),
        ));
    }

    // ── invariants / layout ───────────────────────────────────────────────

    #[test]
    fn products_preserve_affine_bottom_row() {
        let m = Mat3::translation(Vec2::new(5.0, -2.0))
            * Mat3::rotation(1.3)
            * Mat3::scale(2.0, 3.0);
        assert_eq!(m.m[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn gpu_layout_is_padded_column_major() {
        let m = Mat3::translation(Vec2::new(7.0, 8.0));
        let g = m.to_gpu();
        // Third column (translation) starts at float offset 8.
        assert_eq!(&g[8..11], &[7.0, 8.0, 1.0]);
        // Column padding lanes are zero.
        assert_eq!(g[3], 0.0);
        assert_eq!(g[7], 0.0);
        assert_eq!(g[11], 0.0);
    }
}
