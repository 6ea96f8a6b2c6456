//! Coordinate and transform types shared across the engine.
//!
//! Canonical CPU space matches the GPU clip space the flat renderer draws in:
//! - origin at the window center
//! - +X right, +Y up
//! - visible range [-1, 1] on both axes
//!
//! Matrices use the column-vector convention: `v' = M * v`, so in a product
//! `a * b` the right-hand factor applies first. This convention is fixed
//! everywhere matrices are composed.

mod mat3;
mod vec2;

pub use mat3::Mat3;
pub use vec2::Vec2;
