use crate::grid::Pixel;
use crate::quad::Quad;

/// A node of the compressed image.
///
/// Internal nodes exclusively own their four children, in
/// bottom-left, bottom-right, top-left, top-right order. Nothing is shared
/// between subtrees, so a `clone` is always a deep copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// a quadrant with no pixels
    Empty,
    /// a quadrant collapsed to a single intensity
    Leaf(Pixel),
    Internal(Box<Quad<Node>>),
}

impl Node {
    pub fn new_internal(children: Quad<Node>) -> Self {
        Node::Internal(Box::new(children))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal(_))
    }
    pub fn leaf(&self) -> Option<Pixel> {
        match self {
            Node::Leaf(value) => Some(*value),
            _ => None,
        }
    }
    pub fn internal(&self) -> Option<&Quad<Node>> {
        match self {
            Node::Internal(children) => Some(&**children),
            _ => None,
        }
    }
    pub(crate) fn internal_mut(&mut self) -> Option<&mut Quad<Node>> {
        match self {
            Node::Internal(children) => Some(&mut **children),
            _ => None,
        }
    }

    /// Number of Empty and Leaf nodes under this one.
    ///
    /// Internal nodes only count through their children, which keeps the
    /// size equal to the number of non-marker tokens in the preorder form.
    pub fn size(&self) -> usize {
        match self {
            Node::Empty | Node::Leaf(_) => 1,
            Node::Internal(children) => children.iter().map(Node::size).sum(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Empty | Node::Leaf(_) => 0,
            Node::Internal(children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
}

impl From<Pixel> for Node {
    fn from(value: Pixel) -> Self {
        Node::Leaf(value)
    }
}
impl From<Quad<Node>> for Node {
    fn from(children: Quad<Node>) -> Self {
        Node::new_internal(children)
    }
}
