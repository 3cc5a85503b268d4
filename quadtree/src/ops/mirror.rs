use crate::{Node, Quad, Quadrant};

impl Node {
    /// Deep copy of this node turned upside down.
    ///
    /// Leaf and Empty nodes look the same either way up.
    pub fn flip_v(&self) -> Node {
        match self {
            Node::Empty | Node::Leaf(_) => self.clone(),
            Node::Internal(children) => Node::new_internal(children.flip_v()),
        }
    }

    /// Replaces the top half of an Internal node with a reflection of its
    /// bottom half. Returns false, leaving the node alone, for any other variant.
    pub fn mirror(&mut self) -> bool {
        match self.internal_mut() {
            Some(children) => {
                children.mirror();
                true
            }
            None => false,
        }
    }
}

impl Quad<Node> {
    fn flip_v(&self) -> Quad<Node> {
        Quad::from_fn(|q| self[q.flip_v()].flip_v())
    }
    fn mirror(&mut self) {
        for q in [Quadrant::BottomLeft, Quadrant::BottomRight] {
            self[q.flip_v()] = self[q].flip_v();
        }
    }
}
