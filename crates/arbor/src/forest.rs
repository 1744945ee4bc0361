use tracing::debug;

use crate::{
    error::{Error, Result},
    label::Label,
};

/// The minimum vertical space a node occupies, in rows. A leaf takes this
/// many rows; an internal node takes the total of its children. One source of
/// truth for sibling spacing during layout.
pub const MIN_NODE_HEIGHT: u32 = 1;

/// Handle to a node in a [`Forest`]. Ids are only meaningful against the
/// forest that issued them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NodeId(usize);

/// One node's data. Children are owned and ordered; the parent link is a
/// back-reference for navigation only.
#[derive(Debug, Clone)]
struct NodeData {
    name: String,
    label: Label,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena of labeled nodes forming a forest: every node has at most one
/// parent, and no node is reachable from itself. Mutations that would break
/// either invariant are refused before anything is modified.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<NodeData>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a field node and return its id.
    pub fn field(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name.into(), Label::Field)
    }

    /// Insert a table node and return its id.
    pub fn table(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name.into(), Label::Table)
    }

    fn insert(&mut self, name: String, label: Label) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name,
            label,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(id.0).ok_or(Error::UnknownNode)
    }

    /// The node's name, as supplied at insertion.
    pub fn name(&self, id: NodeId) -> Result<&str> {
        Ok(&self.node(id)?.name)
    }

    /// The node's children, in attachment order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// The node's parent, if attached.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// True if `target` is reachable from `from` by following child edges,
    /// including `from` itself.
    fn reaches(&self, from: NodeId, target: NodeId) -> Result<bool> {
        if from == target {
            return Ok(true);
        }
        for &child in &self.node(from)?.children {
            if self.reaches(child, target)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True if `ancestor` appears on `id`'s parent chain, including `id`
    /// itself.
    fn has_ancestor(&self, id: NodeId, ancestor: NodeId) -> Result<bool> {
        let mut cursor = Some(id);
        while let Some(n) = cursor {
            if n == ancestor {
                return Ok(true);
            }
            cursor = self.node(n)?.parent;
        }
        Ok(false)
    }

    /// Append `child` to `parent`'s children and set its back-reference.
    ///
    /// The edge is checked before anything is modified: if `child` is already
    /// attached elsewhere the call fails with [`Error::AlreadyAttached`], and
    /// if the edge would make a node reachable from itself it fails with
    /// [`Error::CycleRejected`]. On failure the forest is left exactly as it
    /// was; a refused cycle edge is a normal outcome the caller may skip.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent.is_some() {
            debug!("refusing attach: child already has a parent");
            return Err(Error::AlreadyAttached);
        }
        // The child's subtree must not already contain the parent, and the
        // parent's ancestor chain must not contain the child.
        if self.reaches(child, parent)? || self.has_ancestor(parent, child)? {
            debug!("refusing attach: edge would create a cycle");
            return Err(Error::CycleRejected);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove `child` from `parent`'s children and clear its back-reference.
    /// A no-op if `child` is not a direct child of `parent`.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let Some(pos) = siblings.iter().position(|&c| c == child) else {
            return Ok(());
        };
        siblings.remove(pos);
        self.node_mut(child)?.parent = None;
        Ok(())
    }

    /// Follow parent links to the root of `id`'s component. Returns `id`
    /// itself when it has no parent.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId> {
        let mut cursor = id;
        while let Some(parent) = self.node(cursor)?.parent {
            cursor = parent;
        }
        Ok(cursor)
    }

    /// All parentless nodes, in insertion order. One per component.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i))
    }

    /// The vertical space the subtree under `id` occupies:
    /// `max(MIN_NODE_HEIGHT, sum of children's heights)`.
    pub fn height(&self, id: NodeId) -> Result<u32> {
        let mut total = 0;
        for &child in &self.node(id)?.children {
            total += self.height(child)?;
        }
        Ok(total.max(MIN_NODE_HEIGHT))
    }

    /// The node's formatted label, before padding.
    pub fn formatted(&self, id: NodeId) -> Result<String> {
        let n = self.node(id)?;
        Ok(n.label.format(&n.name))
    }

    /// Character width of the formatted label.
    pub fn width(&self, id: NodeId) -> Result<usize> {
        Ok(self.formatted(id)?.chars().count())
    }

    /// The node's formatted label widened to `width` in the direction its
    /// label variant dictates.
    pub fn padded(&self, id: NodeId, width: usize) -> Result<String> {
        let n = self.node(id)?;
        n.label.pad(&n.label.format(&n.name), width)
    }
}
