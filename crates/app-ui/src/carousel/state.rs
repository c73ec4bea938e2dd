//! Selection state owned by a carousel controller

use std::time::Instant;

/// Mutable selection state of a single carousel
///
/// Only the controller writes to this value. Indices stored here have
/// already been wrapped or clamped by the controller's
/// [`IndexPolicy`](super::resolver::IndexPolicy).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    active_index: usize,
    last_notified_index: Option<usize>,
    last_update: Option<Instant>,
    last_scroll_position: f32,
}

impl SelectionState {
    /// Create state with `initial_index` active and nothing announced yet
    pub fn new(initial_index: usize) -> Self {
        Self {
            active_index: initial_index,
            last_notified_index: None,
            last_update: None,
            last_scroll_position: initial_index as f32,
        }
    }

    /// Currently settled active index
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Index of the last emitted change, if any
    pub fn last_notified_index(&self) -> Option<usize> {
        self.last_notified_index
    }

    /// Whether at least one change has been emitted
    pub fn has_notified(&self) -> bool {
        self.last_notified_index.is_some()
    }

    /// When the scroll filter last accepted an update
    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Scroll progress recorded at the last accepted update
    pub fn last_scroll_position(&self) -> f32 {
        self.last_scroll_position
    }

    /// Record a scroll update accepted by the filter
    pub fn record_accepted(&mut self, now: Instant, position: f32) {
        self.last_update = Some(now);
        self.last_scroll_position = position;
    }

    /// Record an emitted change. Returns the previous notified index.
    pub(crate) fn mark_notified(&mut self, index: usize) -> Option<usize> {
        self.active_index = index;
        self.last_notified_index.replace(index)
    }

    /// Align the active index without emitting a change
    pub(crate) fn sync_active(&mut self, index: usize) {
        self.active_index = index;
    }
}
