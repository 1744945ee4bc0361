use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// This is useful when we want to deal with `Rect`s abstractly, or when we
/// want to mandate that the location of a `Rect` is (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Default for Expanse {
    /// Constructs a zero-valued size.
    fn default() -> Self {
        Self { w: 0, h: 0 }
    }
}

impl Expanse {
    /// Construct an expanse from a width and height.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a
    /// location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// The center of this expanse, rounded down.
    pub fn center(&self) -> Point {
        Point {
            x: self.w / 2,
            y: self.h / 2,
        }
    }

    /// True if this size can completely enclose the target size in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_and_rect() {
        let e = Expanse::new(4, 3);
        assert_eq!(e.area(), 12);
        assert_eq!(e.rect(), Rect::new((0, 0), 4, 3));
    }

    #[test]
    fn contains() {
        let e = Expanse::new(4, 3);
        assert!(e.contains(&Expanse::new(4, 3)));
        assert!(e.contains(&Expanse::new(1, 1)));
        assert!(!e.contains(&Expanse::new(5, 3)));
        assert!(!e.contains(&Expanse::new(4, 4)));
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(Expanse::new(5, 4).center(), Point::from((2, 2)));
        assert_eq!(Expanse::new(1000, 1000).center(), Point::from((500, 500)));
    }
}
