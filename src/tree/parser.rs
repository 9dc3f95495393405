use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::types::{DuTree, Node, NodeId};

/// Failure to get a listing into memory.
///
/// Malformed lines are not errors; they are skipped and tallied. Only the
/// file itself being unreadable is fatal, and it is reported before any UI
/// is drawn.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a `du` listing from disk and build the tree.
///
/// # Errors
///
/// Returns [`TreeError::Io`] when the file cannot be read.
pub fn load(path: &Path) -> Result<DuTree, TreeError> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_listing(&content);
    tracing::debug!(
        path = %path.display(),
        nodes = tree.len(),
        skipped = tree.skipped_lines(),
        "listing loaded"
    );
    Ok(tree)
}

/// Build a tree from `SIZE<TAB>PATH` lines.
///
/// Records may arrive in any order: intermediate directories are created
/// lazily with size 0 and overwritten when their own line shows up, and the
/// most specific line for a path always wins (last write for duplicates).
/// Each record does work proportional to its depth, so the whole build is a
/// single near-linear pass even for listings with hundreds of thousands of
/// lines.
pub fn parse_listing(input: &str) -> DuTree {
    let mut builder = Builder::new();
    for line in input.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Some((size_kb, path)) => builder.insert(size_kb, path),
            None => builder.skipped += 1,
        }
    }
    builder.finish()
}

/// Split one line into its size and path fields.
///
/// Returns `None` for malformed lines: missing tab, non-numeric size, or an
/// empty path field.
fn parse_record(line: &str) -> Option<(u64, &str)> {
    let (size, path) = line.split_once('\t')?;
    let size_kb = size.trim().parse::<u64>().ok()?;
    if path.is_empty() {
        return None;
    }
    Some((size_kb, path))
}

struct Builder {
    nodes: Vec<Node>,
    /// Normalized path string to arena slot; dropped once the build is done.
    index: HashMap<String, NodeId>,
    skipped: usize,
}

impl Builder {
    fn new() -> Self {
        let root = Node {
            name: ".".to_string(),
            size_kb: 0,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            index: HashMap::new(),
            skipped: 0,
        }
    }

    fn insert(&mut self, size_kb: u64, path: &str) {
        // Leading "." and empty segments (absolute paths, doubled slashes)
        // normalize away; a bare "." or "/" record targets the root itself.
        let segments = path
            .split('/')
            .enumerate()
            .filter(|&(i, seg)| !seg.is_empty() && !(i == 0 && seg == "."))
            .map(|(_, seg)| seg);

        let mut current = NodeId(0);
        let mut key = String::new();
        for seg in segments {
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(seg);
            current = match self.index.get(&key).copied() {
                Some(id) => id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node {
                        name: seg.to_string(),
                        size_kb: 0,
                        parent: Some(current),
                        children: Vec::new(),
                    });
                    self.nodes[current.0].children.push(id);
                    self.index.insert(key.clone(), id);
                    id
                }
            };
        }
        self.nodes[current.0].size_kb = size_kb;
    }

    fn finish(self) -> DuTree {
        DuTree {
            nodes: self.nodes,
            skipped: self.skipped,
        }
    }
}
