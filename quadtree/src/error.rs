use std::fmt;

use crate::{GridError, PreorderError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    Grid(GridError),
    Preorder(PreorderError),
    /// a tree can't be built from a grid with no cells
    EmptyGrid { width: usize, height: usize },
    /// loss levels must be at least 0, NaN is rejected
    InvalidLossLevel(f64),
    /// the tree was queried before `build` or `restore_from_preorder`
    NotBuilt,
    Precondition(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Grid(err) => write!(f, "{err}"),
            Error::Preorder(err) => write!(f, "{err}"),
            Error::EmptyGrid { width, height } => {
                write!(f, "Can't build a tree from an empty {width}x{height} grid")
            }
            Error::InvalidLossLevel(loss_level) => {
                write!(f, "Loss level {loss_level} must be at least 0")
            }
            Error::NotBuilt => write!(f, "Tree has not been built or restored"),
            Error::Precondition(msg) => write!(f, "Precondition violated: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Grid(err) => Some(err),
            Error::Preorder(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        Error::Grid(err)
    }
}
impl From<PreorderError> for Error {
    fn from(err: PreorderError) -> Self {
        Error::Preorder(err)
    }
}
