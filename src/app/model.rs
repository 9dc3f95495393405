use std::collections::HashMap;
use std::path::PathBuf;

use crate::tree::{DuTree, NodeId, SortMode};
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// All state lives here, nothing global or scattered. The tree is
/// topologically immutable after the build pass; everything else is
/// session-scoped navigator state mutated only through
/// [`update`](super::update).
#[derive(Clone)]
pub struct Model {
    /// The loaded disk-usage tree.
    pub tree: DuTree,
    /// Path to the listing file (shown nowhere, kept for reloads in logs).
    pub file_path: PathBuf,
    /// User-selected top of the browsable tree; the true root by default.
    pub virtual_root: NodeId,
    /// Directory whose children are listed; always reachable from
    /// `virtual_root`.
    pub current_dir: NodeId,
    /// Cached sorted children of `current_dir`; rebuilt on directory or
    /// sort-mode change, never by the renderer.
    pub display: Vec<NodeId>,
    /// Selection and scroll state over `display`.
    pub viewport: Viewport,
    /// Active display ordering.
    pub sort_mode: SortMode,
    /// Last-selected row per directory, keyed by node identity so duplicate
    /// names at different depths stay independent.
    pub cursor_memory: HashMap<NodeId, usize>,
    /// Draw tree connectors with plain ASCII instead of box-drawing glyphs.
    pub ascii: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("current_dir", &self.current_dir)
            .field("sort_mode", &self.sort_mode)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model over a built tree.
    ///
    /// `terminal_size` is the full terminal geometry; the listing viewport
    /// gets the rows left after the header and status chrome.
    pub fn new(
        file_path: PathBuf,
        tree: DuTree,
        terminal_size: (u16, u16),
        sort_mode: SortMode,
    ) -> Self {
        let root = tree.root();
        let mut model = Self {
            tree,
            file_path,
            virtual_root: root,
            current_dir: root,
            display: Vec::new(),
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(crate::ui::CHROME_ROWS),
                0,
            ),
            sort_mode,
            cursor_memory: HashMap::new(),
            ascii: false,
            help_visible: false,
            should_quit: false,
        };
        model.rebuild_display();
        model
    }

    /// Recompute the sorted child view of the current directory.
    ///
    /// The selection is clamped into the new listing; callers wanting a
    /// specific row (cursor memory, sort remap) select it afterwards.
    pub(super) fn rebuild_display(&mut self) {
        self.display = self.tree.children_sorted(self.current_dir, self.sort_mode);
        self.viewport.set_total(self.display.len());
    }

    /// Node under the cursor, if the listing is non-empty.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.display.get(self.viewport.selected()).copied()
    }

    /// Logical path from the virtual root to the current directory.
    pub fn header_path(&self) -> String {
        self.tree.path_from(self.virtual_root, self.current_dir)
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(
            PathBuf::new(),
            crate::tree::parse_listing(""),
            (80, 24),
            SortMode::default(),
        )
    }
}
