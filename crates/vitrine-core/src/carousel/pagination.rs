//! Derived pagination state: dot row and edge-navigation flags for one
//! section.
//!
//! Never stored - dependents recompute it on every
//! `SelectedIndexChanged` (and on regrouping) so there is exactly one
//! copy of the truth, inside the viewport controller. Writes flow back
//! only through the controller's own public navigation surface.

use super::viewport::Carousel;

/// Renderable pagination state for a carousel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of pagination dots: one per navigation step.
    pub dot_count: usize,
    /// Dot covering the currently selected index.
    pub active_dot: usize,
    /// Whether a "previous" control should be enabled.
    pub can_scroll_prev: bool,
    /// Whether a "next" control should be enabled.
    pub can_scroll_next: bool,
}

impl Pagination {
    /// Derive from the carousel's current state.
    pub fn derive<T>(carousel: &Carousel<T>) -> Self {
        let group_size = carousel.group_size();
        Self {
            dot_count: carousel.len().div_ceil(group_size),
            active_dot: carousel.selected_index() / group_size,
            can_scroll_prev: carousel.can_scroll_prev(),
            can_scroll_next: carousel.can_scroll_next(),
        }
    }
}
