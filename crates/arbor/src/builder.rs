//! Builds a forest from flat parent-reference records, the shape a relational
//! ingestion layer naturally produces. Records that cannot contribute — a
//! reused id, an unknown edge endpoint, a second parent, or an edge that
//! would close a loop — are skipped and reported rather than treated as
//! fatal.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use tracing::debug;

use crate::{
    error::Error,
    forest::{Forest, NodeId},
};

/// One row of input: a node and an optional reference to its parent's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Caller-side identifier, referenced by other records' `parent`.
    pub id: u64,
    /// Node label text.
    pub label: String,
    /// Id of the parent record, if any.
    pub parent: Option<u64>,
}

impl Record {
    /// Construct a record.
    pub fn new(id: u64, label: impl Into<String>, parent: Option<u64>) -> Self {
        Self {
            id,
            label: label.into(),
            parent,
        }
    }
}

/// A record that contributed nothing to the forest, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// The id of the skipped record.
    pub id: u64,
    /// The parent id the record referenced, when the skip was about an edge.
    pub parent: Option<u64>,
    /// The refusal: [`Error::DuplicateRecord`], [`Error::CycleRejected`],
    /// [`Error::AlreadyAttached`] or [`Error::UnknownNode`].
    pub reason: Error,
}

/// Build a forest of field nodes from records. Nodes are inserted in record
/// order in a first pass; edges are linked in a second pass so forward
/// references work. A record reusing an earlier record's id is reported and
/// dropped whole, and an unlinkable edge leaves both endpoints in the forest
/// as separate components.
pub fn build(records: &[Record]) -> (Forest, Vec<Skipped>) {
    let mut forest = Forest::new();
    let mut skipped = Vec::new();
    let mut ids: HashMap<u64, NodeId> = HashMap::new();
    let mut duplicates: HashSet<usize> = HashSet::new();
    for (pos, record) in records.iter().enumerate() {
        match ids.entry(record.id) {
            Entry::Vacant(slot) => {
                slot.insert(forest.field(&record.label));
            }
            Entry::Occupied(_) => {
                debug!(id = record.id, "skipping duplicate record");
                duplicates.insert(pos);
                skipped.push(Skipped {
                    id: record.id,
                    parent: record.parent,
                    reason: Error::DuplicateRecord,
                });
            }
        }
    }

    for (pos, record) in records.iter().enumerate() {
        if duplicates.contains(&pos) {
            continue;
        }
        let Some(parent_id) = record.parent else {
            continue;
        };
        let result = match (ids.get(&record.id), ids.get(&parent_id)) {
            (Some(&child), Some(&parent)) => forest.attach(parent, child),
            _ => Err(Error::UnknownNode),
        };
        if let Err(reason) = result {
            debug!(id = record.id, parent = parent_id, %reason, "skipping edge");
            skipped.push(Skipped {
                id: record.id,
                parent: Some(parent_id),
                reason,
            });
        }
    }
    (forest, skipped)
}
