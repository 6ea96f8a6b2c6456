use super::{Node, NodeId};

/// Append-only shape tree.
///
/// `push` only accepts parents already present in the graph, so node order is
/// always topological: a parent's index is strictly smaller than any of its
/// children's. Evaluation and drawing walk nodes front to back.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its handle.
    ///
    /// # Panics
    /// Panics if `node.parent` refers to a node not yet in the graph.
    pub fn push(&mut self, node: Node) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(
                parent.index() < self.nodes.len(),
                "parent {} pushed after child (graph has {} nodes)",
                parent.index(),
                self.nodes.len()
            );
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in topological (insertion) order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{Motion, Shape, VertexRange};

    fn leaf(parent: Option<NodeId>) -> Node {
        Node {
            shape: Shape {
                center: Vec2::zero(),
                size: Vec2::new(1.0, 1.0),
                color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
                range: VertexRange::new(0, 6),
            },
            parent,
            motion: Motion::fixed(),
        }
    }

    #[test]
    fn push_returns_sequential_ids() {
        let mut g = SceneGraph::new();
        let a = g.push(leaf(None));
        let b = g.push(leaf(Some(a)));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn parents_always_precede_children() {
        let mut g = SceneGraph::new();
        let root = g.push(leaf(None));
        let mid = g.push(leaf(Some(root)));
        let tip = g.push(leaf(Some(mid)));
        for (i, node) in g.nodes().iter().enumerate() {
            if let Some(p) = node.parent {
                assert!(p.index() < i);
            }
        }
        assert_eq!(tip.index(), 2);
    }

    #[test]
    #[should_panic(expected = "parent")]
    fn forward_parent_reference_is_rejected() {
        let mut g = SceneGraph::new();
        g.push(leaf(Some(NodeId(5))));
    }
}
