use crate::{round_half_up, Grid, Node, Pixel};

impl Node {
    /// Compresses a non-empty grid.
    ///
    /// A grid whose standard deviation is at most `loss_level` becomes a Leaf
    /// holding its mean, anything else is split into quadrants. Quadrants
    /// without cells become Empty. Single cells are always Leafs, so the
    /// recursion ends even for a negative `loss_level`.
    ///
    /// # Panics
    /// if the grid has no cells
    pub(crate) fn build(grid: &Grid, loss_level: f64) -> Node {
        let (standard_deviation, mean) = grid.standard_deviation_and_mean();
        if standard_deviation <= loss_level || grid.cell_count() == 1 {
            #[allow(clippy::cast_possible_truncation)] // mean of i32 cells fits in i32
            let value = round_half_up(mean) as Pixel;
            Node::Leaf(value)
        } else {
            Node::new_internal(grid.split_quadrants().map(|quadrant| {
                if quadrant.is_empty() {
                    Node::Empty
                } else {
                    Node::build(&quadrant, loss_level)
                }
            }))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{test_grid, Grid, Node, Quad};

    #[test]
    fn uniform_collapses() {
        let grid = Grid::filled(7, 5, 42);
        assert_eq!(Node::build(&grid, 0.0), Node::Leaf(42));
        assert_eq!(Node::build(&grid, 10.0), Node::Leaf(42));
    }

    #[test]
    fn lossless_odd() {
        let grid = test_grid! {"
            1 2 3
            4 5 6
            7 8 9
        "};
        let node = Node::build(&grid, 0.0);
        let expected = Node::new_internal(Quad::from_array([
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
        assert_eq!(node, expected);
        assert_eq!(node.to_preorder_string(), ",1,,E,E,2,3,,E,4,E,7,,5,6,8,9");
    }

    #[test]
    fn lossy_rounds_half_up() {
        let grid = test_grid! {"
            1 2 3
            4 5 6
            7 8 9
        "};
        let node = Node::build(&grid, 2.0);
        // 2.5 and 5.5 both round up
        assert_eq!(node.to_preorder_string(), ",1,3,6,7");
    }

    #[test]
    fn negative_loss_level() {
        let grid = test_grid! {"
            4 4
        "};
        let node = Node::build(&grid, -1.0);
        assert_eq!(node.to_preorder_string(), ",E,E,4,4");
    }

    #[test]
    fn threshold_is_inclusive() {
        // standard deviation of exactly 1
        let grid = test_grid! {"
            1 3
            1 3
        "};
        assert_eq!(Node::build(&grid, 1.0), Node::Leaf(2));
        assert!(Node::build(&grid, 0.999).is_internal());
    }
}
