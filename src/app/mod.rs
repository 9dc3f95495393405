//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

use crate::tree::SortMode;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    sort_mode: SortMode,
    ascii: bool,
}

impl App {
    /// Create a new application for the given listing file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            sort_mode: SortMode::default(),
            ascii: false,
        }
    }

    /// Set the initial sort mode.
    #[must_use]
    pub const fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Draw tree connectors with plain ASCII.
    #[must_use]
    pub const fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }
}
