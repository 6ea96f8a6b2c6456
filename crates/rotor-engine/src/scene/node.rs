use crate::coords::Vec2;

use super::Shape;

/// Handle to a node in a [`SceneGraph`](super::SceneGraph).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Local motion of a node relative to its parent frame.
///
/// The local transform is
/// `T(offset) * T(pivot) * R(sin(t) * amplitude) * T(-pivot)`:
/// an oscillating rotation about `pivot` in the node's own frame, carried to
/// `offset` in the parent frame. Rightmost factor applies first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motion {
    /// Fixed translation in the parent frame.
    pub offset: Vec2,
    /// Rotation pivot in the node's local frame.
    pub pivot: Vec2,
    /// Peak rotation angle in radians; the angle at time `t` is
    /// `sin(t) * amplitude`. Zero makes the node static.
    pub amplitude: f32,
}

impl Motion {
    /// No motion: the node keeps its baked-in vertex positions.
    #[inline]
    pub const fn fixed() -> Self {
        Self {
            offset: Vec2::zero(),
            pivot: Vec2::zero(),
            amplitude: 0.0,
        }
    }

    /// Oscillating rotation about `pivot`, no parent-frame offset.
    #[inline]
    pub const fn spin_about(pivot: Vec2, amplitude: f32) -> Self {
        Self {
            offset: Vec2::zero(),
            pivot,
            amplitude,
        }
    }

    /// Oscillating rotation about the node's own origin, carried to `offset`
    /// in the parent frame.
    #[inline]
    pub const fn spin_at(offset: Vec2, amplitude: f32) -> Self {
        Self {
            offset,
            pivot: Vec2::zero(),
            amplitude,
        }
    }
}

/// One shape in the hierarchy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    pub shape: Shape,
    /// Parent whose world transform this node inherits. Must already be in
    /// the graph when the node is pushed.
    pub parent: Option<NodeId>,
    pub motion: Motion,
}
