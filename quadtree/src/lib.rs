//! Lossy compression of single channel images as quadtrees.
//!
//! A [`QuadTree`] splits a [`Grid`] into quadrants until each one's standard
//! deviation is within the loss level, then stores it as a [`Node`] tree that
//! can be rendered back to pixels, written as comma separated preorder
//! tokens, or mirrored.

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod error;
mod grid;
mod node;
mod quad;
mod tree;
mod ops {
    mod build;
    mod loss;
    mod mirror;
    mod pixels;
    mod preorder;
    mod split;
    mod stats;
    mod text_format;

    pub use loss::*;
    pub use pixels::*;
    pub use preorder::*;
    pub use split::*;
    pub use stats::*;
}

pub use crate::node::*;
pub use error::*;
pub use grid::*;
pub use ops::*;
pub use quad::*;
pub use tree::*;
