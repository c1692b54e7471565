use alloc::collections::BTreeMap;

use crate::flatten::visible_descendants;
use crate::model::Forest;

/// Alphabetic section index over a forest's top-level nodes, for
/// jump-scrolling ("scroll to the rows starting with B").
///
/// Keys are the upper-cased first character of each top-level title, mapped
/// to that node's flat position. When two top-level nodes share a first
/// character, the later one wins. The index is a snapshot: rebuilding it is
/// the caller's job whenever the forest is replaced or a node is toggled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionIndex {
    starts: BTreeMap<char, usize>,
    visible_len: usize,
}

fn section_key(title: &str) -> Option<char> {
    title.chars().next().map(fold_key)
}

fn fold_key(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

impl SectionIndex {
    /// Builds the index in one pass over the top-level nodes, recording the
    /// total visible row count along the way.
    pub fn build(forest: &Forest) -> Self {
        let mut starts = BTreeMap::new();
        let mut position = 0;
        for node in forest.nodes() {
            if let Some(key) = section_key(node.title()) {
                starts.insert(key, position);
            }
            position += 1 + visible_descendants(node);
        }
        adebug!(
            sections = starts.len(),
            visible_len = position,
            "SectionIndex::build"
        );
        Self {
            starts,
            visible_len: position,
        }
    }

    /// Number of distinct section keys.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Total visible row count of the forest this index was built from.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// Section keys in lexically sorted order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.starts.keys().copied()
    }

    /// The key of the section at `ordinal` (in sorted key order).
    pub fn key_at(&self, ordinal: usize) -> Option<char> {
        self.starts.keys().nth(ordinal).copied()
    }

    /// Starting flat position of the section for `key` (case-folded).
    pub fn position_for_key(&self, key: char) -> Option<usize> {
        self.starts.get(&fold_key(key)).copied()
    }

    /// Ordinal of the last section (in sorted key order) whose starting
    /// position is at or before `position`; `None` when `position` precedes
    /// every section.
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        let mut found = None;
        for (ordinal, start) in self.starts.values().enumerate() {
            if *start <= position {
                found = Some(ordinal);
            }
        }
        found
    }
}
