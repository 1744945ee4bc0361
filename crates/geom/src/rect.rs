use super::Point;

/// A rectangle positioned at its top-left corner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and dimensions.
    pub fn new(tl: impl Into<Point>, w: u32, h: u32) -> Self {
        Self { tl: tl.into(), w, h }
    }

    /// The 1x1 rectangle covering a single point.
    pub fn single(p: impl Into<Point>) -> Self {
        Self {
            tl: p.into(),
            w: 1,
            h: 1,
        }
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.tl.x && p.x < self.tl.x + self.w && p.y >= self.tl.y && p.y < self.tl.y + self.h
    }

    /// The smallest rectangle covering both this rectangle and the point.
    /// This is how a bounding box is accumulated over a scan of occupied
    /// cells.
    pub fn expand_to(&self, p: impl Into<Point>) -> Self {
        let p = p.into();
        let x1 = self.tl.x.min(p.x);
        let y1 = self.tl.y.min(p.y);
        let x2 = (self.tl.x + self.w).max(p.x + 1);
        let y2 = (self.tl.y + self.h).max(p.y + 1);
        Self {
            tl: Point { x: x1, y: y1 },
            w: x2 - x1,
            h: y2 - y1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point() {
        let r = Rect::new((2, 2), 3, 3);
        assert!(r.contains_point((2, 2)));
        assert!(r.contains_point((4, 4)));
        assert!(!r.contains_point((5, 4)));
        assert!(!r.contains_point((1, 2)));
    }

    #[test]
    fn expand_to() {
        let r = Rect::single((5, 5));
        assert_eq!(r.expand_to((5, 5)), r);
        assert_eq!(r.expand_to((3, 7)), Rect::new((3, 5), 3, 3));
        assert_eq!(r.expand_to((8, 2)), Rect::new((5, 2), 4, 4));
    }
}
