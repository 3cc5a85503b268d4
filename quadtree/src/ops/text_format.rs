use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;

use crate::{Grid, GridError, Pixel};

// macros make formatting nicer

/// panics on invalid input, one row per line with row 0 first
#[macro_export]
macro_rules! test_grid {
    {$s:literal} => {
        $s.parse::<$crate::Grid>().expect("valid test grid")
    };
}

impl FromStr for Grid {
    type Err = GridError;

    /// Expects one row per line with cells separated by whitespace.
    /// Blank lines are skipped, so a literal may start and end with a newline.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}
fn parse_row(row: usize, line: &str) -> Result<Vec<Pixel>, GridError> {
    line.split_ascii_whitespace()
        .enumerate()
        .map(|(column, text)| {
            text.parse().map_err(|_| GridError::InvalidCell {
                row,
                column,
                text: text.to_owned(),
            })
        })
        .collect()
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
