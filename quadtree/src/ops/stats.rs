use crate::Grid;

/// Rounds to the nearest integer, with exact halves going up.
///
/// `round_half_up(2.5) == 3.0`, where banker's rounding would give `2.0`.
pub fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor < 0.5 {
        floor
    } else {
        n.ceil()
    }
}

impl Grid {
    /// arithmetic mean of every cell, and the number of cells
    ///
    /// # Panics
    /// if the grid has no cells
    pub fn mean_and_count(&self) -> (f64, usize) {
        let count = self.cell_count();
        assert!(count > 0, "mean of an empty grid");
        let total: i64 = self.cells().map(i64::from).sum();
        #[allow(clippy::cast_precision_loss)] // exact for any realistic image
        let mean = total as f64 / count as f64;
        (mean, count)
    }

    /// population standard deviation (divides by the count, not count - 1) and the mean
    ///
    /// # Panics
    /// if the grid has no cells
    pub fn standard_deviation_and_mean(&self) -> (f64, f64) {
        let (mean, count) = self.mean_and_count();
        let total_square_error: f64 = self
            .cells()
            .map(|v| {
                let error = f64::from(v) - mean;
                error * error
            })
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let variance = total_square_error / count as f64;
        (variance.sqrt(), mean)
    }
}

#[cfg(test)]
mod test {
    use crate::{round_half_up, test_grid, Grid};

    #[test]
    fn rounding() {
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(0.49), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.7), 3.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn mean() {
        let grid = test_grid! {"
            1 2 3
            4 5 6
        "};
        assert_eq!(grid.mean_and_count(), (3.5, 6));
    }

    #[test]
    fn standard_deviation() {
        let grid = test_grid! {"
            5 6
            8 9
        "};
        let (std_dev, mean) = grid.standard_deviation_and_mean();
        assert_eq!(mean, 7.0);
        assert!((std_dev - 2.5_f64.sqrt()).abs() < 1e-12);

        let flat = Grid::filled(4, 3, 17);
        assert_eq!(flat.standard_deviation_and_mean(), (0.0, 17.0));
    }

    #[test]
    #[should_panic(expected = "mean of an empty grid")]
    fn empty() {
        let _ = Grid::filled(0, 3, 1).mean_and_count();
    }
}
