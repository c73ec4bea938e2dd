//! Carousel configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{CarouselError, Result};
use crate::motion::duration;

/// Default minimum time between accepted scroll updates (ms)
pub const DEFAULT_DEBOUNCE_MS: u64 = 80;

/// Default minimum scroll distance before a new candidate is accepted (px)
pub const DEFAULT_HYSTERESIS_PX: f32 = 15.0;

/// Default rendered width of a carousel item (px)
pub const DEFAULT_ITEM_WIDTH: f32 = 96.0;

/// Default gap between carousel items (px)
pub const DEFAULT_ITEM_SPACING: f32 = 12.0;

/// Static configuration for a carousel instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Wrap around at both ends instead of clamping
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Index active when the controller is created
    pub initial_index: usize,
    /// Minimum time between accepted scroll updates
    pub debounce_ms: u64,
    /// Minimum scroll distance before a new candidate is accepted
    pub hysteresis_px: f32,
    /// Rendered item width
    pub item_width: f32,
    /// Gap between items
    pub item_spacing: f32,
    /// Duration of programmatic scroll animations
    pub snap_duration_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            looping: true,
            initial_index: 0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            hysteresis_px: DEFAULT_HYSTERESIS_PX,
            item_width: DEFAULT_ITEM_WIDTH,
            item_spacing: DEFAULT_ITEM_SPACING,
            snap_duration_ms: duration::SNAP,
        }
    }
}

impl CarouselConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the loop flag
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the initial active index
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Set the debounce interval
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the hysteresis threshold
    pub fn with_hysteresis_px(mut self, px: f32) -> Self {
        self.hysteresis_px = px;
        self
    }

    /// Set item width and spacing
    pub fn with_item_size(mut self, width: f32, spacing: f32) -> Self {
        self.item_width = width;
        self.item_spacing = spacing;
        self
    }

    /// Set the programmatic scroll duration
    pub fn with_snap_duration_ms(mut self, ms: u32) -> Self {
        self.snap_duration_ms = ms;
        self
    }

    /// Distance in pixels between the starts of two adjacent items
    pub fn item_stride(&self) -> f32 {
        self.item_width + self.item_spacing
    }

    /// Debounce interval as a duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Check the configuration against the number of items it will drive
    pub fn validate(&self, item_count: usize) -> Result<()> {
        if item_count == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        if self.initial_index >= item_count {
            return Err(CarouselError::InitialIndexOutOfRange {
                index: self.initial_index,
                count: item_count,
            });
        }
        let stride = self.item_stride();
        if !stride.is_finite() || stride <= 0.0 {
            return Err(CarouselError::InvalidItemWidth(stride));
        }
        if !self.hysteresis_px.is_finite() || self.hysteresis_px < 0.0 {
            return Err(CarouselError::InvalidHysteresis(self.hysteresis_px));
        }
        Ok(())
    }
}
