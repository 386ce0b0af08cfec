//! The [`TilePos`] coordinate type.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An integer tile coordinate on the farm lattice.
///
/// `x` grows to the right and `y` grows downwards, so [`TilePos::UP`] is
/// `(0, -1)`. The same type is used for absolute positions and for
/// offsets relative to a sprinkler.
///
/// Arithmetic wraps at the `i32` limits, so any coordinate is valid input.
/// A wrapped neighbour lands on the far side of the lattice and falls
/// outside every bounded search window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl TilePos {
    /// The origin, also the zero offset.
    pub const ZERO: Self = Self::new(0, 0);
    /// Unit offset towards negative `x`.
    pub const LEFT: Self = Self::new(-1, 0);
    /// Unit offset towards positive `x`.
    pub const RIGHT: Self = Self::new(1, 0);
    /// Unit offset towards negative `y`.
    pub const UP: Self = Self::new(0, -1);
    /// Unit offset towards positive `y`.
    pub const DOWN: Self = Self::new(0, 1);

    /// The four unit offsets, in the order [`neighbors`](Self::neighbors)
    /// returns them.
    pub const NEIGHBOR_OFFSETS: [Self; 4] = [Self::LEFT, Self::RIGHT, Self::UP, Self::DOWN];

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbours (left, right, up, down).
    pub fn neighbors(self) -> [Self; 4] {
        Self::NEIGHBOR_OFFSETS.map(|offset| self + offset)
    }

    /// Returns `true` if `other` is one of the four axis-aligned neighbours.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// L1 distance, which is the step count on the 4-neighbour lattice.
    /// Saturates at `u32::MAX`.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// L∞ distance: the index of the square ring around `self` that
    /// contains `other`.
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for TilePos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for TilePos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for TilePos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Mul<i32> for TilePos {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}

impl Neg for TilePos {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}
