//! Platform capabilities for Astro Connect
//!
//! This crate defines the seams through which UI controllers reach
//! device services: haptic feedback and the assistive-technology
//! announcer. Controllers only ever call these traits; the host shell
//! supplies the concrete implementation for its platform.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessibility;
pub mod haptics;

pub use accessibility::{Announcer, LogAnnouncer, SilentAnnouncer};
pub use haptics::{HapticPattern, Haptics, LogHaptics, NoHaptics};
