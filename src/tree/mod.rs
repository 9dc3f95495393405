//! Disk-usage tree reconstruction and queries.
//!
//! This module handles:
//! - Parsing `SIZE<TAB>PATH` listings as produced by `du -k`
//! - Rebuilding the implied directory hierarchy in a single pass
//! - Read-only queries (sorted child views, descendant checks, paths)

mod parser;
mod types;

pub use parser::{load, parse_listing, TreeError};
pub use types::{DuTree, Node, NodeId, SortMode};
