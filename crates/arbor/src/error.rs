use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by forest construction and rendering.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A label was wider than the column computed for it. Column widths are
    /// derived from the labels themselves, so this indicates a layout defect
    /// rather than bad input.
    #[error("column of width {width} cannot hold {len} characters")]
    ColumnTooNarrow {
        /// Width the column was computed at.
        width: usize,
        /// Character length of the label that did not fit.
        len: usize,
    },

    /// An attachment was refused because it would make a node reachable from
    /// itself. The forest is unchanged; the caller may simply skip the edge.
    #[error("attachment would create a cycle")]
    CycleRejected,

    /// An attachment was refused because the child already has a parent.
    #[error("node already has a parent")]
    AlreadyAttached,

    /// A `NodeId` did not resolve to a node in this forest.
    #[error("unknown node")]
    UnknownNode,

    /// An input record reused an id taken by an earlier record. The earlier
    /// record wins; the duplicate contributes nothing.
    #[error("duplicate record id")]
    DuplicateRecord,
}
