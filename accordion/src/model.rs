use alloc::string::String;
use alloc::vec::Vec;

/// Stable identity of a [`Node`].
///
/// Identity equality is the sole basis for locating a node within a
/// [`Forest`]; positions are never assumed stable across structural edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The presentation category of a row.
///
/// This is a closed set: renderers dispatch on the tag, and the flattening
/// engine consults it only for the visibility rule ([`RowKind::Header`] rows
/// always show their children). Payload fields carry the data specific to a
/// category; rows that only need a title and details carry none.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    /// A category row with a disclosure indicator.
    Category,
    /// A row with a check box; checked state lives in [`Node::is_selected`].
    Checkbox,
    /// A row with a check mark image; checked state lives in [`Node::is_selected`].
    Checkmark,
    /// A color swatch row. `argb` is ignored when `multicolored` is set.
    ColorSwatch { argb: u32, multicolored: bool },
    /// A category row with an up/down expansion arrow.
    Expandable,
    /// A header row. Headers are always treated as expanded.
    Header,
    /// A non-interactive title/details row.
    Label,
    /// A price-range row with editable bounds.
    PriceRange { min: u32, max: u32 },
    /// A plain selectable title/details row.
    Text,
    /// A row with an on/off toggle; on state lives in [`Node::is_selected`].
    Toggle,
    /// Two columns of title/details, treated as a header for styling.
    TwoColumnHeader,
    /// Two columns of title/details.
    TwoColumnDetails,
}

impl RowKind {
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header)
    }
}

/// One row of content, possibly with nested children.
///
/// Everything except `expanded` and `selected` is immutable once constructed.
/// The engine itself mutates only `expanded` (via
/// [`Forest::set_expanded`](crate::Forest::set_expanded) /
/// [`Forest::toggle_expanded`](crate::Forest::toggle_expanded)); `selected`
/// is host-driven UI state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    title: String,
    details: Option<String>,
    subtitle: Option<String>,
    sub_details: Option<String>,
    kind: RowKind,
    expandable: bool,
    expanded: bool,
    selected: bool,
    children: Vec<Node>,
}

impl Node {
    /// Creates a collapsed, expandable `Text` node with no children.
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            details: None,
            subtitle: None,
            sub_details: None,
            kind: RowKind::Text,
            expandable: true,
            expanded: false,
            selected: false,
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: RowKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Secondary title, used as the first cell of two-column rows.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_sub_details(mut self, sub_details: impl Into<String>) -> Self {
        self.sub_details = Some(sub_details.into());
        self
    }

    pub fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn sub_details(&self) -> Option<&str> {
        self.sub_details.as_deref()
    }

    pub fn kind(&self) -> &RowKind {
        &self.kind
    }

    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Host-driven check/selection state.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The visibility rule: whether this node's children occupy flat slots.
    ///
    /// Headers are always open regardless of their `expanded` flag.
    pub fn shows_children(&self) -> bool {
        self.expanded || self.kind.is_header()
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub(crate) fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

/// An ordered sequence of top-level [`Node`]s.
///
/// The forest is the externally supplied content: the host constructs it,
/// replaces it wholesale on content changes, and queries the flattening
/// engine on it. Replacing the forest invalidates every previously computed
/// position and any [`SectionIndex`](crate::SectionIndex) built from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level nodes (not visible rows; see
    /// [`visible_len`](Self::visible_len)).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Deep lookup by identity, ignoring visibility.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find_map(|node| node.find_mut(id))
    }
}

impl From<Vec<Node>> for Forest {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<Node> for Forest {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
