use crate::{round_half_up, Grid, Pixel, Quad};

/// Widths and heights of the four quadrants of a `width x height` area.
///
/// Odd dimensions give the extra row or column to the top or right half, so
/// the smaller half is always the one with lower indices.
pub fn quadrant_dims(width: usize, height: usize) -> Quad<(usize, usize)> {
    Quad::from_fn(|q| {
        let w = if q.is_left() { width / 2 } else { upper_half(width) };
        let h = if q.is_bottom() { height / 2 } else { upper_half(height) };
        (w, h)
    })
}

/// the larger half of `n`, `n / 2` rounded half up
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn upper_half(n: usize) -> usize {
    let half = round_half_up(n as f64 / 2.0) as usize;
    debug_assert_eq!(half, n - n / 2);
    half
}

impl Grid {
    /// Splits into bottom-left, bottom-right, top-left and top-right quadrants.
    ///
    /// Rows below `height / 2` go to the bottom, columns below `width / 2` go
    /// to the left. A 1 row or 1 column grid therefore has empty bottom or
    /// left quadrants.
    pub fn split_quadrants(&self) -> Quad<Grid> {
        let horizontal_middle = self.height() / 2;
        let vertical_middle = self.width() / 2;
        let (bottom, top) = self.rows().split_at(horizontal_middle);
        let split_rows = |rows: &[Vec<Pixel>]| {
            let (left, right): (Vec<_>, Vec<_>) = rows
                .iter()
                .map(|row| {
                    let (left, right) = row.split_at(vertical_middle);
                    (left.to_vec(), right.to_vec())
                })
                .unzip();
            (
                Grid::from_rows_unchecked(vertical_middle, left),
                Grid::from_rows_unchecked(self.width() - vertical_middle, right),
            )
        };
        let (bottom_left, bottom_right) = split_rows(bottom);
        let (top_left, top_right) = split_rows(top);
        Quad {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
        }
    }
}
