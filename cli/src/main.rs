// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quadtree::QuadTree;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Quadtree image compression.
///
/// Grids are read as one row per line, row 0 (the bottom of the image)
/// first, with cells separated by whitespace.
#[derive(Parser, Debug)]
#[command(name = "qtc")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a grid from stdin into preorder tokens
    Compress {
        /// Largest standard deviation a quadrant may have and still be collapsed
        #[arg(short, long, default_value_t = 0.0)]
        loss: f64,
        /// Reflect the bottom half of the image over the top half
        #[arg(short, long)]
        mirror: bool,
    },
    /// Render preorder tokens from stdin back into a grid
    Decompress {
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
    },
    /// Report tree sizes, token count and loss for a grid from stdin
    Inspect {
        #[arg(short, long, default_value_t = 0.0)]
        loss: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    match Args::parse().command {
        Command::Compress { loss, mirror } => {
            let grid = io::read_grid()?;
            let mut tree = QuadTree::new(loss)?;
            tree.build(&grid, mirror).context("failed to compress grid")?;
            info!(width = tree.width(), height = tree.height(), "compressed");
            io::write_line(&tree.serialize_preorder()?)
        }
        Command::Decompress { width, height } => {
            let preorder = io::read_preorder()?;
            let tree = QuadTree::restore_from_preorder_str(&preorder, width, height)
                .context("failed to restore tree")?;
            io::write_grid(&tree.to_pixels()?)
        }
        Command::Inspect { loss } => {
            let grid = io::read_grid()?;
            let mut original = QuadTree::new(0.0)?;
            original.build(&grid, false)?;
            let mut compressed = QuadTree::new(loss)?;
            compressed.build(&grid, false)?;
            let report = io::Report {
                width: grid.width(),
                height: grid.height(),
                lossless_size: original.tree_size()?,
                size: compressed.tree_size()?,
                tokens: compressed
                    .serialize_preorder()?
                    .split(quadtree::TOKEN_SEPARATOR)
                    .count(),
                maximum_loss: original.maximum_loss(&compressed)?,
            };
            io::write_line(&report.to_string())
        }
    }
}
