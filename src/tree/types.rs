use std::cmp::Ordering;

/// Stable handle for a node in the [`DuTree`] arena.
///
/// Identifiers are plain indices; they stay valid for the lifetime of the
/// tree because the arena never removes nodes after the build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One entry (file or directory) in the reconstructed hierarchy.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) size_kb: u64,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Last path segment of this entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reported size in kilobytes.
    ///
    /// Sizes come straight from the listing; `du` already reports cumulative
    /// totals per path, so they are never re-aggregated here.
    pub const fn size_kb(&self) -> u64 {
        self.size_kb
    }

    /// Child identifiers in first-seen order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent identifier, `None` for the root.
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Display ordering for a directory's children.
///
/// The four modes form a fixed cycle; sorting is a display-time projection
/// and never mutates the canonical first-seen child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortMode {
    /// Largest entries first (the startup default).
    #[default]
    SizeDesc,
    /// Smallest entries first.
    SizeAsc,
    /// Names A-Z, case-insensitive.
    NameAsc,
    /// Names Z-A, case-insensitive.
    NameDesc,
}

impl SortMode {
    /// Advance to the next mode in the fixed 4-periodic cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::SizeDesc => Self::SizeAsc,
            Self::SizeAsc => Self::NameAsc,
            Self::NameAsc => Self::NameDesc,
            Self::NameDesc => Self::SizeDesc,
        }
    }

    /// Human-readable label shown in the header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SizeDesc => "Size (largest first)",
            Self::SizeAsc => "Size (smallest first)",
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
        }
    }
}

/// The reconstructed disk-usage hierarchy.
///
/// Nodes live in an arena indexed by [`NodeId`]; children hold ordered
/// identifier lists and parents are identifier back-links, so there is no
/// cyclic ownership. Topology is immutable once the build pass finishes.
#[derive(Debug, Clone)]
pub struct DuTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) skipped: usize,
}

impl DuTree {
    /// Identifier of the true root (`.`).
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node by identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, including the root.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True only for a root-only tree built from an empty listing.
    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of malformed input lines skipped during the build.
    pub const fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Whether the entry is a container (gets a trailing `/` in the UI).
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.node(id).children.is_empty()
    }

    /// Children of `id` ordered by `mode`.
    ///
    /// The sort is stable: children with equal keys keep their first-seen
    /// relative order. The canonical child list is left untouched.
    pub fn children_sorted(&self, id: NodeId, mode: SortMode) -> Vec<NodeId> {
        let mut ids = self.node(id).children.clone();
        ids.sort_by(|&a, &b| self.compare(a, b, mode));
        ids
    }

    fn compare(&self, a: NodeId, b: NodeId, mode: SortMode) -> Ordering {
        let (a, b) = (self.node(a), self.node(b));
        match mode {
            SortMode::SizeDesc => b.size_kb.cmp(&a.size_kb),
            SortMode::SizeAsc => a.size_kb.cmp(&b.size_kb),
            SortMode::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortMode::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
        }
    }

    /// True when `node` is `ancestor` or reachable from it via children.
    pub fn is_descendant_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    /// Slash-joined logical path from `ancestor` down to `node`.
    ///
    /// Returns the node's own name when the two coincide; used for the
    /// header line, which shows the path relative to the virtual root.
    pub fn path_from(&self, ancestor: NodeId, node: NodeId) -> String {
        if node == ancestor {
            return self.node(node).name.clone();
        }
        let mut segments = Vec::new();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            segments.push(self.node(id).name.clone());
            if id == ancestor {
                break;
            }
            cursor = self.node(id).parent;
        }
        segments.reverse();
        segments.join("/")
    }
}
