//! Carousel construction errors

use thiserror::Error;

/// Errors raised when a carousel is configured incorrectly
///
/// These are caller contract violations detected at construction. Once a
/// controller exists none of its operations can fail.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The carousel has no items
    #[error("Carousel requires at least one item")]
    EmptyCarousel,

    /// The initial index does not address an item
    #[error("Initial index {index} out of range for {count} items")]
    InitialIndexOutOfRange {
        /// Requested initial index
        index: usize,
        /// Number of items
        count: usize,
    },

    /// Item width plus spacing is not a positive finite number
    #[error("Invalid item stride: {0}px")]
    InvalidItemWidth(f32),

    /// Hysteresis threshold is negative or not finite
    #[error("Invalid hysteresis threshold: {0}px")]
    InvalidHysteresis(f32),

    /// Configuration could not be parsed
    #[error("Invalid carousel configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for carousel setup
pub type Result<T> = std::result::Result<T, CarouselError>;
