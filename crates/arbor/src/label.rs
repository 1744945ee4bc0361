use pad::{Alignment, PadStr};

use crate::error::{Error, Result};

/// Fill character used when a label is widened to match its column.
pub const FILL: char = '─';

/// How a node's label is formatted and widened. A closed set: fields are
/// leaf-style entries, tables are container-style headers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Label {
    /// Leaf-style label, rendered as `" name "` and padded on the left, so
    /// the connector rule runs up to the text.
    Field,
    /// Container-style label, rendered as `"[name] "` and padded on the
    /// right, so the rule runs from the text toward its children.
    Table,
}

impl Label {
    /// The label text for a node name, before any padding.
    pub fn format(&self, name: &str) -> String {
        match self {
            Self::Field => format!(" {name} "),
            Self::Table => format!("[{name}] "),
        }
    }

    /// Which side the text sits on; padding goes on the other side.
    fn alignment(&self) -> Alignment {
        match self {
            Self::Field => Alignment::Right,
            Self::Table => Alignment::Left,
        }
    }

    /// Widen `text` to exactly `width` characters with [`FILL`]. Column
    /// widths are computed as the maximum label width of a sibling batch, so
    /// a label that exceeds its column is a layout defect and returns
    /// [`Error::ColumnTooNarrow`].
    pub fn pad(&self, text: &str, width: usize) -> Result<String> {
        let len = text.chars().count();
        if width < len {
            return Err(Error::ColumnTooNarrow { width, len });
        }
        Ok(text.pad(width, FILL, self.alignment(), false))
    }
}
