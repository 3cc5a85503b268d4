//! Named slots for the four children of an internal node

use std::ops::{Index, IndexMut};

/// Row 0 of a grid is the bottom row, column 0 is the left column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}
impl Quadrant {
    /// canonical child order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    pub fn is_left(self) -> bool {
        matches!(self, Self::BottomLeft | Self::TopLeft)
    }
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// the quadrant on the other side of the horizontal midline
    pub fn flip_v(self) -> Self {
        match self {
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        Self::ALL.into_iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub bottom_left: T,
    pub bottom_right: T,
    pub top_left: T,
    pub top_right: T,
}
impl<T> Quad<T> {
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            bottom_left: f(Quadrant::BottomLeft),
            bottom_right: f(Quadrant::BottomRight),
            top_left: f(Quadrant::TopLeft),
            top_right: f(Quadrant::TopRight),
        }
    }
    pub fn from_array([bottom_left, bottom_right, top_left, top_right]: [T; 4]) -> Self {
        Quad {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
        }
    }
    pub fn into_array(self) -> [T; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
        ]
    }
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            bottom_left: &self.bottom_left,
            bottom_right: &self.bottom_right,
            top_left: &self.top_left,
            top_right: &self.top_right,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            bottom_left: f(self.bottom_left),
            bottom_right: f(self.bottom_right),
            top_left: f(self.top_left),
            top_right: f(self.top_right),
        }
    }
    pub fn zip<U>(self, other: Quad<U>) -> Quad<(T, U)> {
        Quad {
            bottom_left: (self.bottom_left, other.bottom_left),
            bottom_right: (self.bottom_right, other.bottom_right),
            top_left: (self.top_left, other.top_left),
            top_right: (self.top_right, other.top_right),
        }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_array().into_iter()
    }
}
impl<'a, T> IntoIterator for &'a Quad<T> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::BottomLeft => &mut self.bottom_left,
            Quadrant::BottomRight => &mut self.bottom_right,
            Quadrant::TopLeft => &mut self.top_left,
            Quadrant::TopRight => &mut self.top_right,
        }
    }
}
