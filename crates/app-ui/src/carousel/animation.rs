//! Per-item visual interpolation
//!
//! Items grow and brighten as they approach the center of the strip. The
//! values are recomputed by the renderer on every progress update.

use serde::Serialize;

use super::resolver::IndexPolicy;
use crate::motion::MotionPreferences;

/// Scale of an item one or more positions away from center
pub const EDGE_SCALE: f32 = 0.8;

/// Opacity of an item one or more positions away from center
pub const EDGE_OPACITY: f32 = 0.5;

/// Visual properties of a carousel item at a given scroll progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemVisuals {
    /// Uniform scale factor
    pub scale: f32,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Stacking order, highest at center
    pub z_index: i32,
    /// Whether the item is the one nearest to center
    pub focused: bool,
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Compute the visuals of item `index` while the strip sits at `progress`
///
/// Reduced motion keeps the opacity fade but disables the zoom.
pub fn item_visuals(
    policy: &IndexPolicy,
    index: usize,
    progress: f32,
    prefs: &MotionPreferences,
) -> ItemVisuals {
    let distance = policy.signed_distance(index, progress).abs();
    let t = if distance.is_finite() { distance.min(1.0) } else { 1.0 };

    let scale = if prefs.reduce_motion {
        1.0
    } else {
        lerp(1.0, EDGE_SCALE, t)
    };
    let z_index = if distance < 0.5 {
        2
    } else if distance < 1.5 {
        1
    } else {
        0
    };

    ItemVisuals {
        scale,
        opacity: lerp(1.0, EDGE_OPACITY, t),
        z_index,
        focused: distance < 0.5,
    }
}
