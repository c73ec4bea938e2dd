//! Progress-to-index resolution
//!
//! Maps continuous scroll progress (measured in items) onto discrete item
//! indices, either wrapping around a looping carousel or clamping to the
//! ends of a finite one.

/// Boundary behavior for a carousel of fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPolicy {
    count: usize,
    looping: bool,
}

impl IndexPolicy {
    /// Create a policy for `count` items. `count` must be non-zero.
    pub fn new(count: usize, looping: bool) -> Self {
        debug_assert!(count > 0, "carousel needs at least one item");
        Self { count, looping }
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether indices wrap around
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Resolve scroll progress to the nearest item index
    ///
    /// Halfway values round towards the larger index, so `2.5` resolves to
    /// `3` and `-0.5` to `0`. NaN resolves as `0`.
    pub fn resolve(&self, progress: f32) -> usize {
        let rounded = if progress.is_nan() {
            0
        } else {
            (f64::from(progress) + 0.5).floor() as i64
        };
        self.sanitize_i64(rounded)
    }

    /// Bring an arbitrary index into range using the wrap/clamp policy
    pub fn sanitize(&self, index: isize) -> usize {
        self.sanitize_i64(index as i64)
    }

    fn sanitize_i64(&self, index: i64) -> usize {
        let n = self.count as i64;
        if self.looping {
            index.rem_euclid(n) as usize
        } else {
            index.clamp(0, n - 1) as usize
        }
    }

    /// Move `delta` steps from `from`
    pub fn step(&self, from: usize, delta: isize) -> usize {
        self.sanitize_i64(from as i64 + delta as i64)
    }

    /// Signed number of steps on the shortest path from `from` to `to`
    ///
    /// Positive means forward. When both directions around a loop are
    /// equally long the forward direction is chosen.
    pub fn shortest_path(&self, from: usize, to: usize) -> isize {
        let (from, to) = (from as isize, to as isize);
        if !self.looping {
            return to - from;
        }
        let n = self.count as isize;
        let forward = (to - from).rem_euclid(n);
        let backward = n - forward;
        if forward == 0 {
            0
        } else if forward <= backward {
            forward
        } else {
            -backward
        }
    }

    /// Whether `index` is passed when moving `steps` from `from`
    ///
    /// Both ends count as on the path.
    pub fn on_path(&self, from: usize, steps: isize, index: usize) -> bool {
        let (from, index) = (from as isize, index as isize);
        if steps == 0 {
            return index == from;
        }
        if !self.looping {
            let end = from + steps;
            return (from.min(end)..=from.max(end)).contains(&index);
        }
        let travelled = ((index - from) * steps.signum()).rem_euclid(self.count as isize);
        travelled <= steps.abs()
    }

    /// Signed distance of item `index` from the centered progress value
    ///
    /// In a loop the result is folded into `[-count/2, count/2]` so items on
    /// the far side of the seam are measured the short way round.
    pub fn signed_distance(&self, index: usize, progress: f32) -> f32 {
        let delta = index as f32 - progress;
        if !self.looping {
            return delta;
        }
        let n = self.count as f32;
        delta - n * (delta / n).round()
    }
}
