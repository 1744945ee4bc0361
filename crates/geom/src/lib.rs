//! Geometry primitives used by the arbor canvas.

/// Width/height size type.
mod expanse;
/// Signed center-relative coordinate helpers.
mod offset;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use offset::Offset;
pub use point::Point;
pub use rect::Rect;
