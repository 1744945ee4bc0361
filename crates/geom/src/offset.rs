use std::ops::Add;

/// A signed displacement relative to some origin. Offsets let a canvas grow
/// left/right and up/down from a central anchor point.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Offset {
    /// Horizontal displacement, negative is leftward.
    pub x: i32,
    /// Vertical displacement, negative is upward.
    pub y: i32,
}

impl Offset {
    /// The zero displacement.
    pub fn zero() -> Self {
        (0, 0).into()
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(i32, i32)> for Offset {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(Offset::zero() + (2, -3).into(), (2, -3).into());
        assert_eq!(Offset::from((1, 1)) + (-1, -1).into(), Offset::zero());
    }
}
