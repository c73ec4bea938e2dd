//! User interface for Astro Connect
//!
//! This crate provides the interactive controllers behind the app's
//! screens. Rendering is done by the host shell; the types here own the
//! state those views display.
//!
//! # Modules
//!
//! - [`carousel`] - Center-detection controller for the zodiac sign carousel
//! - [`motion`] - Animation durations, easings and reduced-motion handling
//!
//! # Example
//!
//! ```rust
//! use app_core::zodiac;
//! use app_ui::carousel::{CarouselConfig, CarouselController};
//! use app_ui::motion::MotionPreferences;
//!
//! let mut carousel = CarouselController::new(zodiac::signs(), CarouselConfig::default())?
//!     .with_motion_preferences(MotionPreferences::reduced());
//!
//! carousel.on_item_tap(4);
//! assert_eq!(carousel.active_item().name, "Leo");
//! # Ok::<(), app_ui::carousel::CarouselError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod carousel;
pub mod motion;

// Re-export commonly used types
pub use carousel::{
    CarouselConfig, CarouselController, CarouselError, CarouselItem, CarouselPhase, ChangeEvent,
    ChangeReason, KeyDirection, ScrollRequest, ScrollSurface,
};

pub use motion::{MotionPreferences, SnapAnimation};
