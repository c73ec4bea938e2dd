//! Debounce and hysteresis gate for scroll updates
//!
//! Raw scroll progress arrives on every frame while a gesture is active.
//! The filter decides which of those ticks may propose a new active item,
//! suppressing flicker when the strip is dragged quickly or jitters around
//! an item boundary.

use std::time::{Duration, Instant};

use super::config::CarouselConfig;
use super::state::SelectionState;

/// Tunables of the scroll filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFilter {
    /// Minimum time between accepted updates
    pub debounce: Duration,
    /// Minimum travel in pixels between accepted updates
    pub hysteresis_px: f32,
    /// Pixel width of one item of progress
    pub item_width_px: f32,
}

impl ScrollFilter {
    /// Create a filter from explicit tunables
    pub fn new(debounce: Duration, hysteresis_px: f32, item_width_px: f32) -> Self {
        Self {
            debounce,
            hysteresis_px,
            item_width_px,
        }
    }

    /// Build the filter described by a carousel configuration
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self::new(config.debounce(), config.hysteresis_px, config.item_stride())
    }

    /// Whether the debounce window since the last accepted update has passed
    pub fn debounce_elapsed(&self, now: Instant, state: &SelectionState) -> bool {
        match state.last_update() {
            Some(last) => now.saturating_duration_since(last) >= self.debounce,
            None => true,
        }
    }

    /// Pixel distance between `raw_progress` and the last accepted position
    pub fn pixel_delta(&self, raw_progress: f32, state: &SelectionState) -> f32 {
        (raw_progress - state.last_scroll_position()).abs() * self.item_width_px
    }

    /// Decide whether a raw scroll tick may propose a new active index
    ///
    /// Hysteresis only applies once a change has been emitted, so the very
    /// first tick after construction always gets through to announce the
    /// initial item.
    pub fn should_accept(&self, now: Instant, raw_progress: f32, state: &SelectionState) -> bool {
        if !self.debounce_elapsed(now, state) {
            return false;
        }
        if state.has_notified() && self.pixel_delta(raw_progress, state) < self.hysteresis_px {
            return false;
        }
        true
    }
}

impl Default for ScrollFilter {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default())
    }
}
