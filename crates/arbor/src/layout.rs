use std::collections::VecDeque;

use tracing::trace;

use crate::{
    canvas::{Canvas, DEFAULT_CANVAS},
    error::Result,
    forest::{Forest, NodeId},
};

/// Defines the set of glyphs used to draw connectors between a node and its
/// children.
pub struct ConnectorGlyphs {
    /// Straight run to an only child.
    pub horizontal: char,
    /// Vertical rule spanning the rows between siblings.
    pub vertical: char,
    /// Junction at the first of several children.
    pub branch: char,
    /// Junction at a middle child.
    pub tee: char,
    /// Junction at the last of several children.
    pub corner: char,
}

/// Single line thin Unicode box drawing connector set
pub const SINGLE: ConnectorGlyphs = ConnectorGlyphs {
    horizontal: '─',
    vertical: '│',
    branch: '┬',
    tee: '├',
    corner: '└',
};

/// A node pending placement, with the center-relative position its label
/// starts at.
struct Slot {
    x: i32,
    y: i32,
    node: NodeId,
}

/// Render the subtree under `root` onto a default-sized canvas with the
/// [`SINGLE`] glyph set.
pub fn render(forest: &Forest, root: NodeId) -> Result<Canvas> {
    render_onto(forest, root, &SINGLE, Canvas::new(DEFAULT_CANVAS))
}

/// Render the subtree under `root` onto the given canvas.
///
/// Nodes are processed a batch at a time, where a batch is one parent's
/// sibling group. Each batch shares a column width equal to its widest label;
/// two parents at the same depth may use different widths. Every child is
/// placed one column to the right of its parent's column, at a vertical
/// offset accumulating the heights of the siblings placed before it.
pub fn render_onto(
    forest: &Forest,
    root: NodeId,
    glyphs: &ConnectorGlyphs,
    mut canvas: Canvas,
) -> Result<Canvas> {
    let mut queue: VecDeque<Vec<Slot>> = VecDeque::new();
    queue.push_back(vec![Slot {
        x: 0,
        y: 0,
        node: root,
    }]);

    while let Some(batch) = queue.pop_front() {
        let mut level_width = 0;
        for slot in &batch {
            level_width = level_width.max(forest.width(slot.node)?);
        }
        trace!(batch = batch.len(), level_width, "placing batch");

        for slot in &batch {
            canvas.write(&forest.padded(slot.node, level_width)?, (slot.x, slot.y));

            let col = slot.x + level_width as i32;
            let children = forest.children(slot.node)?;
            let mut next = Vec::with_capacity(children.len());
            let mut i: i32 = 0;
            for (j, &child) in children.iter().enumerate() {
                let child_height = forest.height(child)? as i32;

                // Rule down to the next sibling's junction.
                if j + 1 < children.len() {
                    for k in 0..=child_height {
                        canvas.put((col, slot.y + i + k), glyphs.vertical);
                    }
                }

                let junction = if children.len() == 1 {
                    glyphs.horizontal
                } else if j + 1 == children.len() {
                    glyphs.corner
                } else if j == 0 {
                    glyphs.branch
                } else {
                    glyphs.tee
                };
                canvas.put((col, slot.y + i), junction);

                next.push(Slot {
                    x: col + 1,
                    y: slot.y + i,
                    node: child,
                });
                i += child_height;
            }
            if !next.is_empty() {
                queue.push_back(next);
            }
        }
    }
    Ok(canvas)
}

/// Render every component of the forest and join the diagrams with a blank
/// line, in root insertion order.
pub fn render_all(forest: &Forest) -> Result<String> {
    let mut diagrams = Vec::new();
    for root in forest.roots() {
        diagrams.push(render(forest, root)?.render());
    }
    Ok(diagrams.join("\n\n"))
}
