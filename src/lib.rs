//! Astro Connect client
//!
//! Umbrella crate re-exporting the workspace members so the host shell can
//! depend on a single package.
//!
//! - [`domain`] - domain data (zodiac catalogue)
//! - [`platform`] - haptics and screen reader seams
//! - [`ui`] - carousel controller and motion tokens

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core as domain;
pub use app_platform as platform;
pub use app_ui as ui;
