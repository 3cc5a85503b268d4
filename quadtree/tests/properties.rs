use proptest::prelude::*;
use quadtree::{Grid, Node, QuadTree, INTERNAL_TOKEN, TOKEN_SEPARATOR};

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12)
        .prop_flat_map(|(width, height)| {
            prop::collection::vec(prop::collection::vec(0..=255i32, width), height)
        })
        .prop_map(|rows| Grid::from_rows(rows).expect("rectangular"))
}

fn arb_loss_level() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..80.0f64]
}

fn build(grid: &Grid, loss_level: f64) -> QuadTree {
    let mut tree = QuadTree::new(loss_level).unwrap();
    tree.build(grid, false).unwrap();
    tree
}

proptest! {
    #[test]
    fn render_keeps_dimensions(grid in arb_grid(), loss_level in arb_loss_level()) {
        let pixels = build(&grid, loss_level).to_pixels().unwrap();
        prop_assert_eq!(pixels.height(), grid.height());
        prop_assert_eq!(pixels.width(), grid.width());
        prop_assert!(pixels.rows().iter().all(|row| row.len() == grid.width()));
    }

    #[test]
    fn lossless_render_is_exact(grid in arb_grid()) {
        prop_assert_eq!(build(&grid, 0.0).to_pixels().unwrap(), grid);
    }

    #[test]
    fn split_dimensions_add_up(grid in arb_grid()) {
        let quads = grid.split_quadrants();
        prop_assert_eq!(quads.bottom_left.width() + quads.bottom_right.width(), grid.width());
        prop_assert_eq!(quads.top_left.width() + quads.top_right.width(), grid.width());
        prop_assert_eq!(quads.bottom_left.height() + quads.top_left.height(), grid.height());
        prop_assert_eq!(quads.bottom_right.height() + quads.top_right.height(), grid.height());
        prop_assert!(quads.bottom_left.width() <= quads.bottom_right.width());
        prop_assert!(quads.bottom_left.height() <= quads.top_left.height());
        let cells: usize = quads.iter().map(Grid::cell_count).sum();
        prop_assert_eq!(cells, grid.cell_count());
    }

    #[test]
    fn preorder_round_trip(grid in arb_grid(), loss_level in arb_loss_level()) {
        let tree = build(&grid, loss_level);
        let preorder = tree.serialize_preorder().unwrap();
        let tokens: Vec<&str> = preorder.split(TOKEN_SEPARATOR).collect();
        let restored = QuadTree::restore_from_preorder(&tokens, grid.width(), grid.height()).unwrap();
        prop_assert_eq!(restored.to_pixels(), tree.to_pixels());
        prop_assert_eq!(restored.tree_size(), tree.tree_size());
        prop_assert_eq!(restored.root(), tree.root());
    }

    #[test]
    fn size_counts_non_internal_tokens(grid in arb_grid(), loss_level in arb_loss_level()) {
        let tree = build(&grid, loss_level);
        let preorder = tree.serialize_preorder().unwrap();
        let tokens = preorder
            .split(TOKEN_SEPARATOR)
            .filter(|token| *token != INTERNAL_TOKEN)
            .count();
        prop_assert_eq!(tree.tree_size().unwrap(), tokens);
    }

    #[test]
    fn uniform_grid_is_one_leaf(
        width in 1usize..20,
        height in 1usize..20,
        value in 0..=255i32,
        loss_level in arb_loss_level(),
    ) {
        let tree = build(&Grid::filled(width, height, value), loss_level);
        prop_assert_eq!(tree.root(), Some(&Node::Leaf(value)));
        prop_assert_eq!(tree.tree_size().unwrap(), 1);
    }

    #[test]
    fn lossless_leaves_are_uniform(grid in arb_grid()) {
        // every leaf of a lossless tree covers cells of a single value
        let tree = build(&grid, 0.0);
        let loss = tree.maximum_loss(&tree).unwrap();
        prop_assert!(loss == 0.0);
    }

    #[test]
    fn loss_within_level(grid in arb_grid(), loss_level in arb_loss_level()) {
        let original = build(&grid, 0.0);
        let compressed = build(&grid, loss_level);
        let loss = original.maximum_loss(&compressed).unwrap();
        prop_assert!(loss <= loss_level + 1e-9, "loss {} > level {}", loss, loss_level);
    }

    #[test]
    fn mirror_reflects_bottom_half(
        size in 1usize..6,
        cells in prop::collection::vec(0..=255i32, 64),
    ) {
        // square powers of two split evenly at every depth
        let side = 1usize << size;
        let rows: Vec<Vec<i32>> = (0..side)
            .map(|r| (0..side).map(|c| cells[(r * 7 + c * 3) % cells.len()]).collect())
            .collect();
        let grid = Grid::from_rows(rows).unwrap();
        let mut tree = QuadTree::new(0.0).unwrap();
        if tree.build(&grid, true).is_ok() {
            let pixels = tree.to_pixels().unwrap();
            let half = side / 2;
            for r in 0..half {
                prop_assert_eq!(&pixels.rows()[r], &grid.rows()[r]);
                prop_assert_eq!(&pixels.rows()[side - 1 - r], &grid.rows()[r]);
            }
        }
    }
}
