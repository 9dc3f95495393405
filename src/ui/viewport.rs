//! Cursor and scroll state for the directory listing.
//!
//! The [`Viewport`] tracks the selected row and the first visible row,
//! keeping the selection inside the visible page across every movement,
//! resize, and listing change.

use std::ops::Range;

/// Manages selection and scrolling over one directory's sorted children.
///
/// Invariants (for a non-empty listing):
/// - `selected < total`
/// - `offset <= selected < offset + height`
///
/// # Example
///
/// ```
/// use duvi::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10, 100);
/// vp.jump_bottom();
/// assert_eq!(vp.selected(), 99);
/// assert_eq!(vp.visible_range(), 90..100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    selected: usize,
    offset: usize,
    total: usize,
}

impl Viewport {
    /// Create a viewport over `total` rows with `height` visible.
    pub const fn new(width: u16, height: u16, total: usize) -> Self {
        Self {
            width,
            height,
            selected: 0,
            offset: 0,
            total,
        }
    }

    /// Index of the selected row (0 when the listing is empty).
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Viewport width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of visible rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total rows in the listing.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// The range of row indices currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total);
        self.offset..end
    }

    /// Move the selection down by one, clamped to the last row.
    pub fn select_down(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    /// Move the selection up by one, clamped to the first row.
    pub fn select_up(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// Move the selection down one page.
    pub fn page_down(&mut self) {
        self.select(self.selected.saturating_add(self.height.max(1) as usize));
    }

    /// Move the selection up one page.
    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(self.height.max(1) as usize));
    }

    /// Jump to the first row.
    pub fn jump_top(&mut self) {
        self.select(0);
    }

    /// Jump to the last row.
    pub fn jump_bottom(&mut self) {
        self.select(self.total.saturating_sub(1));
    }

    /// Select a row, clamping to bounds and scrolling it into view.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.total.saturating_sub(1));
        self.scroll_into_view();
    }

    /// Replace the listing length, keeping the selection valid.
    ///
    /// Called when entering a directory or re-sorting; callers reposition
    /// the selection afterwards via [`Viewport::select`].
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.selected = self.selected.min(total.saturating_sub(1));
        self.offset = self.offset.min(self.max_offset());
        self.scroll_into_view();
    }

    /// Apply a new terminal geometry, re-clamping selection and scroll.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
        self.scroll_into_view();
    }

    /// Shift the scroll window so the selected row is visible.
    fn scroll_into_view(&mut self) {
        let page = self.height.max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + page {
            self.offset = self.selected + 1 - page;
        }
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.height.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 20, 100);
        assert_eq!(vp.selected(), 0);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_select_down_moves_selection() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.select_down();
        assert_eq!(vp.selected(), 1);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_select_down_clamps_at_last_row() {
        let mut vp = Viewport::new(80, 20, 3);
        for _ in 0..10 {
            vp.select_down();
        }
        assert_eq!(vp.selected(), 2);
    }

    #[test]
    fn test_select_up_clamps_at_zero() {
        let mut vp = Viewport::new(80, 20, 3);
        vp.select_up();
        assert_eq!(vp.selected(), 0);
    }

    #[test]
    fn test_selection_scrolls_past_page_bottom() {
        let mut vp = Viewport::new(80, 5, 100);
        for _ in 0..6 {
            vp.select_down();
        }
        assert_eq!(vp.selected(), 6);
        assert_eq!(vp.offset(), 2);
        assert_eq!(vp.visible_range(), 2..7);
    }

    #[test]
    fn test_selection_scrolls_back_above_offset() {
        let mut vp = Viewport::new(80, 5, 100);
        vp.select(50);
        vp.select(10);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_page_down_shifts_by_page_height() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.page_down();
        assert_eq!(vp.selected(), 10);
        vp.page_down();
        assert_eq!(vp.selected(), 20);
    }

    #[test]
    fn test_page_up_shifts_by_page_height() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.select(25);
        vp.page_up();
        assert_eq!(vp.selected(), 15);
    }

    #[test]
    fn test_jump_top_and_bottom() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.jump_bottom();
        assert_eq!(vp.selected(), 99);
        assert_eq!(vp.visible_range(), 90..100);
        vp.jump_top();
        assert_eq!(vp.selected(), 0);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_empty_listing_pins_selection_to_zero() {
        let mut vp = Viewport::new(80, 10, 0);
        vp.select_down();
        vp.jump_bottom();
        assert_eq!(vp.selected(), 0);
        assert_eq!(vp.visible_range(), 0..0);
    }

    #[test]
    fn test_set_total_clamps_selection() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.select(80);
        vp.set_total(5);
        assert_eq!(vp.selected(), 4);
        assert!(vp.offset() <= vp.selected());
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.select(50);
        vp.resize(80, 5);
        let range = vp.visible_range();
        assert!(range.contains(&vp.selected()));
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let mut vp = Viewport::new(80, 0, 100);
        vp.select(42);
        assert_eq!(vp.selected(), 42);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selection_always_within_bounds(
                total in 0..10000usize,
                height in 1..100u16,
                moves in proptest::collection::vec(0..6u8, 0..50),
            ) {
                let mut vp = Viewport::new(80, height, total);
                for m in moves {
                    match m {
                        0 => vp.select_down(),
                        1 => vp.select_up(),
                        2 => vp.page_down(),
                        3 => vp.page_up(),
                        4 => vp.jump_top(),
                        _ => vp.jump_bottom(),
                    }
                    prop_assert!(vp.selected() <= total.saturating_sub(1));
                    if total > 0 {
                        prop_assert!(vp.offset() <= vp.selected());
                        prop_assert!(vp.selected() < vp.offset() + height as usize);
                    }
                }
            }

            #[test]
            fn visible_range_within_bounds(
                total in 0..10000usize,
                height in 1..100u16,
                target in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total);
                vp.select(target);
                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total);
            }

            #[test]
            fn resize_never_loses_selection(
                total in 1..10000usize,
                target in 0..10000usize,
                new_height in 1..100u16,
            ) {
                let mut vp = Viewport::new(80, 24, total);
                vp.select(target);
                let selected = vp.selected();
                vp.resize(80, new_height);
                prop_assert_eq!(vp.selected(), selected);
                prop_assert!(vp.visible_range().contains(&selected));
            }
        }
    }
}
