use crate::{quadrant_dims, Grid, Node, Pixel, Quad};

/// Intensity an Empty node renders as.
///
/// Empty nodes normally only sit in zero sized quadrants, but mirroring can
/// move one into a quadrant with area, which then shows up as white.
pub const EMPTY_FILL: Pixel = 255;

impl Node {
    /// renders this node into a `width x height` grid, bottom row first
    pub fn to_pixels(&self, width: usize, height: usize) -> Grid {
        match self {
            Node::Empty => Grid::filled(width, height, EMPTY_FILL),
            Node::Leaf(value) => Grid::filled(width, height, *value),
            Node::Internal(children) => children.to_pixels(width, height),
        }
    }
}

impl Quad<Node> {
    fn to_pixels(&self, width: usize, height: usize) -> Grid {
        let Quad {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
        } = self
            .as_ref()
            .zip(quadrant_dims(width, height))
            .map(|(child, (w, h))| child.to_pixels(w, h));
        let bottom = bottom_left.beside(bottom_right);
        let top = top_left.beside(top_right);
        bottom.stack(top)
    }
}

#[cfg(test)]
mod test {
    use crate::{Node, Quad};

    #[test]
    fn leaf() {
        assert_eq!(Node::Leaf(5).to_pixels(2, 2).rows(), [[5, 5], [5, 5]]);
        assert_eq!(
            Node::Leaf(6).to_pixels(1, 5).rows(),
            [[6], [6], [6], [6], [6]]
        );
        assert_eq!(Node::Leaf(7).to_pixels(5, 1).rows(), [[7, 7, 7, 7, 7]]);
    }

    #[test]
    fn empty() {
        assert!(Node::Empty.to_pixels(0, 3).is_empty());
        assert_eq!(Node::Empty.to_pixels(2, 1).rows(), [[255, 255]]);
    }

    #[test]
    fn internal_odd() {
        // the tree of a lossless 3x3 build
        let node = Node::new_internal(Quad::from_array([
            Node::Leaf(1),
            Node::new_internal(Quad::from_array([
                Node::Empty,
                Node::Empty,
                Node::Leaf(2),
                Node::Leaf(3),
            ])),
            Node::new_internal(Quad::from_array([
                Node::Empty,
                Node::Leaf(4),
                Node::Empty,
                Node::Leaf(7),
            ])),
            Node::new_internal(Quad::from_array([5, 6, 8, 9].map(Node::Leaf))),
        ]));
        assert_eq!(
            node.to_pixels(3, 3).rows(),
            [[1, 2, 3], [4, 5, 6], [7, 8, 9]]
        );
    }

    #[test]
    fn internal_dims() {
        let node = Node::new_internal(Quad::from_array([1, 2, 3, 4].map(Node::Leaf)));
        let grid = node.to_pixels(5, 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            grid.rows(),
            [[1, 1, 2, 2, 2], [3, 3, 4, 4, 4], [3, 3, 4, 4, 4]]
        );
    }
}
