use std::error::Error;
use std::fmt::{self, Display};

/// intensity of a single cell, nominally 0..=255 but never clamped
pub type Pixel = i32;

/// A rectangular, row-major grid of intensities.
///
/// Row 0 is the bottom row of the image. All rows have the same length,
/// which is checked on construction. The width is kept even when there are
/// no rows, so a split can produce `0 x n` quadrants that still know how
/// wide they are.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<Pixel>>,
}
impl Grid {
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                actual: rows[row].len(),
            });
        }
        Ok(Self { width, rows })
    }
    /// `height` rows of `width` copies of `value`
    pub fn filled(width: usize, height: usize, value: Pixel) -> Self {
        Self {
            width,
            rows: vec![vec![value; width]; height],
        }
    }
    /// callers guarantee every row has length `width`
    pub(crate) fn from_rows_unchecked(width: usize, rows: Vec<Vec<Pixel>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width), "ragged grid");
        Self { width, rows }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    pub fn cell_count(&self) -> usize {
        self.width * self.height()
    }
    /// true if there are no rows or the rows have no cells
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }
    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows
    }
    pub fn cells(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.rows.iter().flatten().copied()
    }
    pub fn get(&self, row: usize, column: usize) -> Option<Pixel> {
        self.rows.get(row)?.get(column).copied()
    }

    /// stacks `top` above `self`, both must have the same width
    pub(crate) fn stack(mut self, top: Grid) -> Grid {
        debug_assert_eq!(self.width, top.width);
        self.rows.extend(top.rows);
        self
    }
    /// joins `right` onto the end of each row, both must have the same height
    pub(crate) fn beside(mut self, right: Grid) -> Grid {
        debug_assert_eq!(self.height(), right.height());
        for (row, tail) in self.rows.iter_mut().zip(right.rows) {
            row.extend(tail);
        }
        self.width += right.width;
        self
    }
}

impl TryFrom<Vec<Vec<Pixel>>> for Grid {
    type Error = GridError;
    fn try_from(rows: Vec<Vec<Pixel>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    InvalidCell {
        row: usize,
        column: usize,
        text: String,
    },
}
impl Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Grid rows must have equal length, row {row} has {actual} cells but expected {expected}"
            ),
            GridError::InvalidCell { row, column, text } => {
                write!(f, "Invalid cell {text:?} at row {row}, column {column}")
            }
        }
    }
}
impl Error for GridError {}
