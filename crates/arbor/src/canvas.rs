use geom::{Expanse, Offset, Rect};

/// Sentinel value for a cell that has never been written.
const EMPTY: char = '\0';

/// Canvas dimensions used by [`crate::render`]. Generous enough that any
/// realistic tree fits; content that still spills over is clipped, not an
/// error.
pub const DEFAULT_CANVAS: Expanse = Expanse { w: 1000, h: 1000 };

/// A fixed-size character grid. Writes are addressed by signed offsets from
/// the grid's center, so a tree can grow in any direction from its root at
/// the origin. The grid is allocated once and never resized; writes that land
/// outside it are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Expanse,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a canvas of the given size with every cell empty.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Canvas {
            size,
            cells: vec![EMPTY; size.area() as usize],
        }
    }

    /// The fixed dimensions of this canvas.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// True if no cell has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Map a center-relative offset to a cell index, if it falls on the grid.
    fn idx(&self, off: Offset) -> Option<usize> {
        let p = self.size.center().shift(off)?;
        if self.size.rect().contains_point(p) {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Write a single character at a center-relative offset. Out-of-bounds
    /// offsets are silently dropped.
    pub fn put(&mut self, off: impl Into<Offset>, ch: char) {
        if let Some(i) = self.idx(off.into()) {
            self.cells[i] = ch;
        }
    }

    /// Write a string starting at a center-relative offset, one cell per
    /// character, advancing rightward. Characters that land outside the grid
    /// are dropped.
    pub fn write(&mut self, text: &str, off: impl Into<Offset>) {
        let off = off.into();
        for (i, ch) in text.chars().enumerate() {
            self.put((off.x + i as i32, off.y), ch);
        }
    }

    /// Read back the character at a center-relative offset, if the offset is
    /// on the grid and the cell has been written.
    pub fn get(&self, off: impl Into<Offset>) -> Option<char> {
        self.idx(off.into())
            .map(|i| self.cells[i])
            .filter(|&c| c != EMPTY)
    }

    /// The minimal bounding rectangle containing every written cell, in
    /// absolute grid coordinates. `None` if the canvas is empty.
    fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for y in 0..self.size.h {
            for x in 0..self.size.w {
                if self.cells[y as usize * self.size.w as usize + x as usize] != EMPTY {
                    bounds = Some(match bounds {
                        None => Rect::single((x, y)),
                        Some(r) => r.expand_to((x, y)),
                    });
                }
            }
        }
        bounds
    }

    /// Render the occupied bounding box as text: one line per row, empty
    /// cells mapped to spaces, lines joined with `\n`. An untouched canvas
    /// renders as the empty string. Pure and idempotent.
    pub fn render(&self) -> String {
        let Some(b) = self.bounds() else {
            return String::new();
        };
        let mut lines = Vec::with_capacity(b.h as usize);
        for y in b.tl.y..b.tl.y + b.h {
            let mut line = String::with_capacity(b.w as usize);
            for x in b.tl.x..b.tl.x + b.w {
                let ch = self.cells[y as usize * self.size.w as usize + x as usize];
                line.push(if ch == EMPTY { ' ' } else { ch });
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
