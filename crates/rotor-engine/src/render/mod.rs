//! GPU rendering subsystem.
//!
//! The flat renderer consumes `(matrix, vertex range)` pairs and issues one
//! draw call per pair, in pair order, against a shared static vertex buffer.
//!
//! Convention:
//! - CPU geometry is authored in clip space ([-1, 1], +Y up).
//! - The vertex shader applies a per-draw 3x3 affine transform.

mod ctx;
mod flat;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use flat::FlatRenderer;
pub use mesh::{FlatVertex, MeshBuilder};
