//! Renders labeled forests as box-drawing tree diagrams.
//!
//! A [`Forest`] holds labeled nodes linked into trees through cycle-checked
//! [`Forest::attach`] calls. [`render`] lays a tree out left-to-right on a
//! [`Canvas`], one column band per sibling batch, drawing `─ │ ┬ ├ └`
//! connectors between parents and children. [`Canvas::render`] extracts the
//! trimmed text.
//!
//! ```
//! use arbor::Forest;
//!
//! let mut forest = Forest::new();
//! let users = forest.table("users");
//! let alice = forest.field("Alice");
//! let bob = forest.field("Bob");
//! forest.attach(users, alice)?;
//! forest.attach(users, bob)?;
//! let text = arbor::render(&forest, users)?.render();
//! assert_eq!(text, "[users] ┬ Alice \n        └── Bob ");
//! # Ok::<(), arbor::Error>(())
//! ```

/// Forest construction from flat records.
pub mod builder;
mod canvas;
/// Error types for forest mutation and rendering.
pub mod error;
mod forest;
mod label;
/// Tree layout and connector drawing.
pub mod layout;

pub use canvas::{Canvas, DEFAULT_CANVAS};
pub use error::{Error, Result};
pub use forest::{Forest, MIN_NODE_HEIGHT, NodeId};
pub use label::Label;
pub use layout::{ConnectorGlyphs, SINGLE, render, render_all};

pub use geom;
