//! The flat projection: depth-first pre-order traversal of the forest where a
//! node's subtree occupies flat slots only while every ancestor on the path
//! satisfies the visibility rule.
//!
//! The rule is re-checked at every depth, for counting and lookup alike, so
//! `visible_len`, `node_at` and `position_of` always agree on the same index
//! space and position round-trips hold.

use crate::model::{Forest, Node, NodeId, RowKind};

/// Result of [`Forest::toggle_expanded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleOutcome {
    /// Flat position of the toggled node, or `None` when the node is itself
    /// hidden inside a collapsed subtree.
    pub position: Option<usize>,
    /// The node's new `expanded` flag.
    pub expanded: bool,
    /// How many descendant rows appeared or disappeared. Always `0` for
    /// header nodes, whose children are visible either way.
    pub affected: usize,
}

/// Number of visible rows in `node`'s subtree, excluding `node` itself.
pub(crate) fn visible_descendants(node: &Node) -> usize {
    if !node.shows_children() {
        return 0;
    }
    node.children()
        .iter()
        .map(|child| 1 + visible_descendants(child))
        .sum()
}

/// Walks `children` looking for the node `pos` slots in. `Err` carries how
/// many slots remain after the level is exhausted.
fn node_in<'a>(children: &'a [Node], mut pos: usize) -> Result<&'a Node, usize> {
    for node in children {
        if pos == 0 {
            return Ok(node);
        }
        pos -= 1;
        if node.shows_children() {
            match node_in(node.children(), pos) {
                Ok(found) => return Ok(found),
                Err(rest) => pos = rest,
            }
        }
    }
    Err(pos)
}

/// Mirror walk of [`node_in`]: `Ok` is the flat offset of `id` within this
/// level's slots, `Err` the total number of slots the level occupies.
fn position_in(children: &[Node], id: NodeId) -> Result<usize, usize> {
    let mut offset = 0;
    for node in children {
        if node.id() == id {
            return Ok(offset);
        }
        offset += 1;
        if node.shows_children() {
            match position_in(node.children(), id) {
                Ok(pos) => return Ok(offset + pos),
                Err(span) => offset += span,
            }
        }
    }
    Err(offset)
}

impl Forest {
    /// Total number of visible rows. O(total nodes).
    pub fn visible_len(&self) -> usize {
        self.nodes()
            .iter()
            .map(|node| 1 + visible_descendants(node))
            .sum()
    }

    /// The node occupying flat slot `position`, or `None` when out of range.
    pub fn node_at(&self, position: usize) -> Option<&Node> {
        node_in(self.nodes(), position).ok()
    }

    /// Row-type dispatch for renderers: the kind of the row at `position`.
    pub fn kind_at(&self, position: usize) -> Option<&RowKind> {
        self.node_at(position).map(Node::kind)
    }

    /// Flat position of the node with identity `id`.
    ///
    /// Returns `None` when the node is absent or currently hidden inside a
    /// collapsed subtree; both are expected outcomes, not errors.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        position_in(self.nodes(), id).ok()
    }

    /// Sets the `expanded` flag on the node with identity `id`, wherever it
    /// sits in the tree. Returns `false` when no such node exists.
    ///
    /// This is the only mutation the engine performs. Callers must treat all
    /// previously computed positions and section indexes as stale afterwards.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                adebug!(id = id.0, expanded, "Forest::set_expanded");
                node.set_expanded(expanded);
                true
            }
            None => false,
        }
    }

    /// Flips the `expanded` flag on the node with identity `id` and reports
    /// where the change landed, so hosts can issue range insert/remove
    /// notifications. Returns `None` when no such node exists.
    pub fn toggle_expanded(&mut self, id: NodeId) -> Option<ToggleOutcome> {
        let node = self.get_mut(id)?;
        let before = visible_descendants(node);
        let expanded = !node.is_expanded();
        node.set_expanded(expanded);
        let after = visible_descendants(node);

        let affected = after.abs_diff(before);
        let position = self.position_of(id);
        atrace!(id = id.0, expanded, affected, "Forest::toggle_expanded");
        Some(ToggleOutcome {
            position,
            expanded,
            affected,
        })
    }
}
