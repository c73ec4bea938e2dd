//! Motion tokens and reduced-motion handling
//!
//! Durations and easing curves shared by animated components. Every
//! animation resolves its timing through [`MotionPreferences`] so the
//! operating system's "reduce motion" setting collapses transitions to an
//! immediate state change.

use serde::{Deserialize, Serialize};

/// Animation durations in milliseconds
pub mod duration {
    /// Instant (0ms)
    pub const INSTANT: u32 = 0;
    /// Snap settle (250ms)
    pub const SNAP: u32 = 250;
}

/// Easing curves
pub mod easing {
    /// Linear
    pub const LINEAR: &str = "linear";
    /// Ease out, used for snapping onto an item
    pub const EASE_OUT: &str = "cubic-bezier(0, 0, 0.2, 1)";
}

/// User motion and feedback preferences supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionPreferences {
    /// Whether to reduce motion animations
    pub reduce_motion: bool,
    /// Whether to enable haptic feedback
    pub haptic_feedback: bool,
}

impl Default for MotionPreferences {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            haptic_feedback: true,
        }
    }
}

impl MotionPreferences {
    /// Preferences with reduced motion enabled
    pub fn reduced() -> Self {
        Self {
            reduce_motion: true,
            ..Self::default()
        }
    }

    /// Set the haptic feedback flag
    pub fn with_haptic_feedback(mut self, haptic_feedback: bool) -> Self {
        self.haptic_feedback = haptic_feedback;
        self
    }

    /// Effective duration for an animation of `ms` milliseconds
    pub fn duration(&self, ms: u32) -> u32 {
        if self.reduce_motion {
            duration::INSTANT
        } else {
            ms
        }
    }
}

/// Resolved timing for a snap or programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapAnimation {
    /// Duration in milliseconds (0 means apply immediately)
    pub duration_ms: u32,
    /// Easing curve
    pub easing: &'static str,
}

impl SnapAnimation {
    /// Resolve a snap animation of the requested duration against preferences
    pub fn resolve(duration_ms: u32, prefs: &MotionPreferences) -> Self {
        let duration_ms = prefs.duration(duration_ms);
        let easing = if duration_ms == duration::INSTANT {
            easing::LINEAR
        } else {
            easing::EASE_OUT
        };
        Self { duration_ms, easing }
    }

    /// Whether the transition should be animated at all
    pub fn is_animated(&self) -> bool {
        self.duration_ms > 0
    }
}
