//! Haptic feedback
//!
//! Fire-and-forget vibration requests. Implementations must not block the
//! UI thread.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Kind of tactile feedback to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    /// Light tick used when a selection settles
    #[default]
    Selection,
    /// Short impact used for direct taps
    ImpactLight,
}

impl HapticPattern {
    /// Stable name passed to the native bridge
    pub fn as_str(&self) -> &'static str {
        match self {
            HapticPattern::Selection => "selection",
            HapticPattern::ImpactLight => "impact_light",
        }
    }
}

impl std::fmt::Display for HapticPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Haptic feedback engine
pub trait Haptics {
    /// Play a feedback pattern
    fn vibrate(&self, pattern: HapticPattern);
}

/// Haptics implementation that does nothing (desktop, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _pattern: HapticPattern) {}
}

/// Haptics implementation that only records requests in the trace log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn vibrate(&self, pattern: HapticPattern) {
        trace!(%pattern, "haptic feedback");
    }
}

impl<H: Haptics + ?Sized> Haptics for Box<H> {
    fn vibrate(&self, pattern: HapticPattern) {
        (**self).vibrate(pattern)
    }
}

impl<H: Haptics + ?Sized> Haptics for std::rc::Rc<H> {
    fn vibrate(&self, pattern: HapticPattern) {
        (**self).vibrate(pattern)
    }
}
