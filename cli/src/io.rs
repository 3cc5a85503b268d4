use std::fmt::{self, Display};
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use itertools::Itertools;
use quadtree::Grid;

pub fn read_grid() -> Result<Grid> {
    let text = read_stdin()?;
    let grid: Grid = text.parse().context("failed to parse grid")?;
    anyhow::ensure!(!grid.is_empty(), "grid has no cells");
    Ok(grid)
}

/// trailing newlines are dropped, everything else is part of a token
pub fn read_preorder() -> Result<String> {
    let text = read_stdin()?;
    Ok(text.trim_end_matches(['\n', '\r']).to_owned())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

pub fn write_grid(grid: &Grid) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{grid}")?;
    out.flush()?;
    Ok(())
}

pub fn write_line(line: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

pub struct Report {
    pub width: usize,
    pub height: usize,
    pub lossless_size: usize,
    pub size: usize,
    /// preorder tokens, Internal markers included
    pub tokens: usize,
    pub maximum_loss: f64,
}
impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("dimensions", format!("{}x{}", self.width, self.height)),
            ("lossless size", self.lossless_size.to_string()),
            ("size", self.size.to_string()),
            ("tokens", self.tokens.to_string()),
            ("maximum loss", format!("{:.4}", self.maximum_loss)),
        ];
        write!(
            f,
            "{}",
            fields
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .join("\n")
        )
    }
}

#[cfg(test)]
mod test {
    use super::Report;

    #[test]
    fn report() {
        let report = Report {
            width: 3,
            height: 2,
            lossless_size: 9,
            size: 4,
            tokens: 5,
            maximum_loss: 1.581_138_8,
        };
        assert_eq!(
            report.to_string(),
            "dimensions: 3x2\nlossless size: 9\nsize: 4\ntokens: 5\nmaximum loss: 1.5811"
        );
    }
}
