// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. tree::TreeError)
    clippy::module_name_repetitions
)]

//! # Duvi
//!
//! An interactive terminal browser for `du` output.
//!
//! Duvi reads a flat `SIZE<TAB>PATH` listing (as produced by `du -k`),
//! rebuilds the directory hierarchy it implies, and lets you explore it
//! like a file manager:
//! - Cursor navigation with per-directory cursor memory
//! - Four sort orders cycled with a single key
//! - Re-rooting at any directory and back out again
//! - Scrolled rendering that follows terminal resizes
//!
//! ## Architecture
//!
//! Duvi uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`tree`]: Listing parser and tree queries
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved flag defaults

pub mod app;
pub mod config;
pub mod tree;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::tree::{DuTree, NodeId, SortMode};
    pub use crate::ui::viewport::Viewport;
}
