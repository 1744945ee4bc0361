use std::ops::Add;

use super::Offset;

/// An absolute location on a grid, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column, growing rightward.
    pub x: u32,
    /// Row, growing downward.
    pub y: u32,
}

impl Point {
    /// The point at (0, 0).
    pub fn zero() -> Self {
        (0, 0).into()
    }

    /// Shift the point by a signed offset. Returns `None` if the result would
    /// fall off the grid in the negative direction.
    pub fn shift(&self, off: Offset) -> Option<Self> {
        let x = u32::try_from(i64::from(self.x) + i64::from(off.x)).ok()?;
        let y = u32::try_from(i64::from(self.y) + i64::from(off.y)).ok()?;
        Some(Self { x, y })
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}
