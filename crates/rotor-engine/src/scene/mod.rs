//! Scene hierarchy and per-frame transform evaluation.
//!
//! Responsibilities:
//! - store static shape descriptions and their parent links
//! - guarantee parents precede children (node order is topological)
//! - recompute world transforms from scratch every frame

mod evaluate;
mod graph;
mod node;
mod shape;

pub use evaluate::world_transforms;
pub use graph::SceneGraph;
pub use node::{Motion, Node, NodeId};
pub use shape::{Shape, VertexRange};
