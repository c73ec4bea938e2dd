//! Center-detection carousel
//!
//! Drives the horizontally scrolling zodiac strip on the home screen. The
//! renderer reports raw scroll progress, snap completion, taps and key
//! presses; the [`CarouselController`] turns those into a single active
//! index and emits a [`ChangeEvent`] tagged with the cause of each change.
//!
//! ```text
//! raw input -> IndexPolicy -> ScrollFilter -> SelectionState -> Notifier
//!                                                     |-> callback
//!                                                     |-> announcer
//! ```
//!
//! # Example
//!
//! ```rust
//! use app_core::zodiac;
//! use app_ui::carousel::{CarouselConfig, CarouselController, ChangeReason, KeyDirection};
//!
//! let mut carousel = CarouselController::new(zodiac::signs(), CarouselConfig::default())?;
//! carousel.on_active_change(|event| {
//!     assert_eq!(event.reason, ChangeReason::Keyboard);
//! });
//!
//! let index = carousel.on_keyboard_navigate(KeyDirection::Left);
//! assert_eq!(index, 11);
//! assert_eq!(carousel.active_item().name, "Pisces");
//! # Ok::<(), app_ui::carousel::CarouselError>(())
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod notifier;
pub mod resolver;
pub mod state;

use app_core::zodiac::ZodiacSign;

pub use animation::{item_visuals, ItemVisuals};
pub use config::CarouselConfig;
pub use controller::{
    CarouselController, CarouselPhase, DetachedSurface, KeyDirection, ScrollRequest, ScrollSurface,
};
pub use error::{CarouselError, Result};
pub use filter::ScrollFilter;
pub use notifier::{ChangeCallback, ChangeEvent, ChangeReason, Notifier};
pub use resolver::IndexPolicy;
pub use state::SelectionState;

/// An entry that can be shown in a carousel
pub trait CarouselItem {
    /// Stable identifier
    fn id(&self) -> &str;

    /// Name read out by screen readers
    fn label(&self) -> &str;
}

impl CarouselItem for ZodiacSign {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
