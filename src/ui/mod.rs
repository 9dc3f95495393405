//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Selection and scroll state for the listing
//! - [`format`]: Human-readable size formatting
//! - Frame rendering (header, rows, status bar, help overlay)

pub mod format;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::render;

/// Rows consumed by chrome around the listing: header, column header,
/// status bar. The listing gets everything in between.
pub const CHROME_ROWS: u16 = 3;

/// Column width reserved for the right-aligned size field.
pub const SIZE_COL_WIDTH: usize = 10;

/// Smallest terminal we attempt to lay out; below this we just show a notice.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 4;
