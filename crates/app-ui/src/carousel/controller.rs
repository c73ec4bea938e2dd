//! Carousel controller and input adapters
//!
//! All entry points run synchronously on the UI thread. The controller
//! moves through three phases:
//!
//! - `Idle` - nothing in motion
//! - `Tracking` - scroll progress is streaming in from a gesture
//! - `Settling` - a target is known and the strip is moving onto it
//!
//! Scroll-driven changes are low-latency previews tagged
//! [`ChangeReason::Scroll`]; the snap that ends a gesture is the binding
//! commit. Taps, key presses and programmatic selection commit immediately
//! and mark the following snap as already accounted for. Scroll updates
//! along the way to such a target are the strip settling and stay silent;
//! an update that leaves that path drops the pending target.

use std::time::{Duration, Instant};

use app_platform::{Announcer, HapticPattern, Haptics, NoHaptics};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::animation::{item_visuals, ItemVisuals};
use super::config::CarouselConfig;
use super::error::Result;
use super::filter::ScrollFilter;
use super::notifier::{self, ChangeEvent, ChangeReason, Notifier};
use super::resolver::IndexPolicy;
use super::state::SelectionState;
use super::CarouselItem;
use crate::motion::{MotionPreferences, SnapAnimation};

/// Instruction for the renderer to bring an item to the center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    /// Target item index
    pub index: usize,
    /// Signed steps along the shortest path from the current item
    pub steps: isize,
    /// Whether to animate the transition
    pub animated: bool,
    /// Animation duration in milliseconds (0 when not animated)
    pub duration_ms: u32,
    /// Easing curve
    pub easing: &'static str,
}

/// Scrollable strip that renders the carousel
///
/// Requests follow "latest wins": a new request supersedes any animation
/// still in flight.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface {
    /// Scroll so that `request.index` sits at the center
    fn scroll_to(&self, request: ScrollRequest);
}

/// Surface used before the renderer is attached
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl ScrollSurface for DetachedSurface {
    fn scroll_to(&self, request: ScrollRequest) {
        trace!(index = request.index, "scroll request with no surface attached");
    }
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselPhase {
    /// No pending motion
    #[default]
    Idle,
    /// Scroll updates are arriving
    Tracking,
    /// A target index is known and the strip is settling on it
    Settling,
}

/// Keyboard navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDirection {
    /// Previous item
    Left,
    /// Next item
    Right,
    /// First item
    Home,
    /// Last item
    End,
}

impl KeyDirection {
    /// Map a platform key name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(KeyDirection::Left),
            "ArrowRight" | "Right" => Some(KeyDirection::Right),
            "Home" => Some(KeyDirection::Home),
            "End" => Some(KeyDirection::End),
            _ => None,
        }
    }
}

/// Tap, key press or programmatic selection whose snap has not arrived yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExternalUpdate {
    from: usize,
    target: usize,
    steps: isize,
}

/// Center-detection carousel controller
///
/// Owns the [`SelectionState`] of one carousel and reconciles gesture
/// scrolling, snapping, taps, keyboard navigation and programmatic
/// selection into one active index.
pub struct CarouselController<T> {
    items: Vec<T>,
    config: CarouselConfig,
    policy: IndexPolicy,
    filter: ScrollFilter,
    prefs: MotionPreferences,
    state: SelectionState,
    phase: CarouselPhase,
    /// Consumed by the next snap, or dropped when scrolling leaves its path
    external: Option<ExternalUpdate>,
    notifier: Notifier<T>,
    haptics: Box<dyn Haptics>,
    surface: Box<dyn ScrollSurface>,
}

impl<T: CarouselItem> CarouselController<T> {
    /// Create a controller over `items`
    ///
    /// Fails when `items` is empty or the configuration is inconsistent
    /// with the number of items.
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self> {
        config.validate(items.len())?;
        let policy = IndexPolicy::new(items.len(), config.looping);
        debug!(
            count = items.len(),
            looping = config.looping,
            initial = config.initial_index,
            "carousel created"
        );

        Ok(Self {
            policy,
            filter: ScrollFilter::from_config(&config),
            prefs: MotionPreferences::default(),
            state: SelectionState::new(config.initial_index),
            phase: CarouselPhase::Idle,
            external: None,
            notifier: Notifier::new(),
            haptics: Box::new(NoHaptics),
            surface: Box::new(DetachedSurface),
            items,
            config,
        })
    }

    /// Attach a haptic feedback engine
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Attach a screen reader announcer
    pub fn with_announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.notifier.set_announcer(Box::new(announcer));
        self
    }

    /// Attach the rendering surface
    pub fn with_scroll_surface(mut self, surface: impl ScrollSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    /// Apply initial motion preferences
    pub fn with_motion_preferences(mut self, prefs: MotionPreferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// Register the change callback, replacing any previous one
    pub fn on_active_change<F>(&mut self, callback: F)
    where
        F: for<'a> FnMut(&ChangeEvent<'a, T>) + 'static,
    {
        self.notifier.set_callback(Box::new(callback));
    }

    /// Remove the change callback
    pub fn clear_active_change(&mut self) {
        self.notifier.clear_callback();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Currently active index
    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    /// Currently active item
    pub fn active_item(&self) -> &T {
        // active_index is always in range for a non-empty item list
        &self.items[self.state.active_index()]
    }

    /// All items in carousel order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a controller cannot be built without items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether indices wrap around
    pub fn is_looping(&self) -> bool {
        self.policy.is_looping()
    }

    /// Current phase
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Selection state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Active motion preferences
    pub fn motion_preferences(&self) -> MotionPreferences {
        self.prefs
    }

    /// Whether a tap, key press or programmatic selection awaits its snap
    pub fn has_pending_external_update(&self) -> bool {
        self.external.is_some()
    }

    /// Accessible name of an item, e.g. "Leo, 5 of 12"
    pub fn accessibility_label(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|item| notifier::accessibility_label(item.label(), index, self.items.len()))
    }

    /// Announcement spoken when an item becomes active
    pub fn announcement_for(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|item| notifier::selection_announcement(item.label(), index, self.items.len()))
    }

    /// Visuals for item `index` while the strip is at `progress`
    pub fn item_visuals(&self, index: usize, progress: f32) -> ItemVisuals {
        item_visuals(&self.policy, index, progress, &self.prefs)
    }

    // =========================================================================
    // Runtime updates
    // =========================================================================

    /// Update motion preferences (e.g. the OS reduce-motion setting changed)
    pub fn set_motion_preferences(&mut self, prefs: MotionPreferences) {
        if self.prefs != prefs {
            debug!(
                reduce_motion = prefs.reduce_motion,
                haptics = prefs.haptic_feedback,
                "motion preferences updated"
            );
        }
        self.prefs = prefs;
    }

    /// Change the debounce interval
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.config.debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX);
        self.filter = ScrollFilter::from_config(&self.config);
    }

    /// Change the hysteresis threshold. Negative or non-finite values are ignored.
    pub fn set_hysteresis_px(&mut self, px: f32) {
        if !px.is_finite() || px < 0.0 {
            warn!(px, "ignoring invalid hysteresis threshold");
            return;
        }
        self.config.hysteresis_px = px;
        self.filter = ScrollFilter::from_config(&self.config);
    }

    // =========================================================================
    // Input adapters
    // =========================================================================

    /// Raw scroll progress from the renderer, timestamped now
    pub fn on_scroll_progress(&mut self, progress: f32) {
        self.on_scroll_progress_at(progress, Instant::now());
    }

    /// Raw scroll progress observed at `now`
    ///
    /// Accepted updates may emit a provisional [`ChangeReason::Scroll`]
    /// change. While a tap, key press or programmatic selection is still
    /// settling, updates between its origin and target are ignored; the
    /// first update outside that range cancels the pending target.
    pub fn on_scroll_progress_at(&mut self, progress: f32, now: Instant) {
        if !progress.is_finite() {
            warn!(progress, "ignoring non-finite scroll progress");
            return;
        }
        if self.phase == CarouselPhase::Idle {
            self.set_phase(CarouselPhase::Tracking);
        }
        if let Some(pending) = self.external {
            let index = self.policy.resolve(progress);
            if self.policy.on_path(pending.from, pending.steps, index) {
                trace!(
                    progress,
                    target = pending.target,
                    "scroll update while settling on external target"
                );
                return;
            }
            debug!(index, target = pending.target, "scroll left external target path");
            self.external = None;
            self.set_phase(CarouselPhase::Tracking);
        }
        if !self.filter.should_accept(now, progress, &self.state) {
            trace!(progress, "scroll update filtered");
            return;
        }

        self.state.record_accepted(now, progress);
        let index = self.policy.resolve(progress);
        self.notifier
            .notify(index, ChangeReason::Scroll, &mut self.state, &self.items);
    }

    /// The strip finished settling on `index`
    ///
    /// Commits the index with [`ChangeReason::Snap`] unless the snap is the
    /// tail of a tap, key press or programmatic selection onto the same
    /// item, in which case only feedback and state sync happen.
    pub fn on_snap_complete(&mut self, index: isize) {
        let index = self.policy.sanitize(index);
        self.set_phase(CarouselPhase::Settling);

        match self.external.take() {
            Some(pending) if pending.target == index => {
                debug!(index, "external update settled");
                self.state.sync_active(index);
            }
            Some(pending) => {
                debug!(index, target = pending.target, "snap landed away from external target");
                self.notifier
                    .notify(index, ChangeReason::Snap, &mut self.state, &self.items);
            }
            None => {
                self.notifier
                    .notify(index, ChangeReason::Snap, &mut self.state, &self.items);
            }
        }

        self.feedback(HapticPattern::Selection);
        self.set_phase(CarouselPhase::Idle);
    }

    /// The user tapped item `index`
    ///
    /// Commits immediately with [`ChangeReason::Click`] and asks the
    /// renderer to bring the item to the center.
    pub fn on_item_tap(&mut self, index: isize) {
        let index = self.policy.sanitize(index);
        let from = self.state.active_index();
        if index == from && self.state.has_notified() {
            trace!(index, "tap on active item");
            return;
        }

        self.notifier
            .notify(index, ChangeReason::Click, &mut self.state, &self.items);
        self.feedback(HapticPattern::ImpactLight);
        if index != from {
            self.begin_external_update(from, index, true);
        }
    }

    /// Arrow/Home/End navigation
    ///
    /// Returns the new active index so the caller can scroll the strip.
    pub fn on_keyboard_navigate(&mut self, direction: KeyDirection) -> usize {
        let from = self.state.active_index();
        let target = match direction {
            KeyDirection::Left => self.policy.step(from, -1),
            KeyDirection::Right => self.policy.step(from, 1),
            KeyDirection::Home => 0,
            KeyDirection::End => self.items.len() - 1,
        };

        self.notifier
            .notify(target, ChangeReason::Keyboard, &mut self.state, &self.items);
        if target != from {
            self.begin_external_update(from, target, false);
        }
        target
    }

    /// Select `index` from outside the carousel (e.g. a picker dialog)
    pub fn set_active_index(&mut self, index: isize) {
        self.set_active_index_with_reason(index, ChangeReason::Programmatic);
    }

    /// Select `index` from outside the carousel with an explicit reason
    pub fn set_active_index_with_reason(&mut self, index: isize, reason: ChangeReason) {
        let index = self.policy.sanitize(index);
        let from = self.state.active_index();

        self.notifier
            .notify(index, reason, &mut self.state, &self.items);
        if index != from {
            self.begin_external_update(from, index, true);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn begin_external_update(&mut self, from: usize, to: usize, scroll: bool) {
        self.external = Some(ExternalUpdate {
            from,
            target: to,
            steps: self.policy.shortest_path(from, to),
        });
        self.set_phase(CarouselPhase::Settling);
        if scroll {
            self.request_scroll(from, to);
        }
    }

    fn request_scroll(&self, from: usize, to: usize) {
        let animation = SnapAnimation::resolve(self.config.snap_duration_ms, &self.prefs);
        let request = ScrollRequest {
            index: to,
            steps: self.policy.shortest_path(from, to),
            animated: animation.is_animated(),
            duration_ms: animation.duration_ms,
            easing: animation.easing,
        };
        debug!(
            index = request.index,
            steps = request.steps,
            animated = request.animated,
            "requesting scroll"
        );
        self.surface.scroll_to(request);
    }

    fn feedback(&self, pattern: HapticPattern) {
        if self.prefs.haptic_feedback {
            self.haptics.vibrate(pattern);
        }
    }

    fn set_phase(&mut self, phase: CarouselPhase) {
        if self.phase != phase {
            trace!(from = ?self.phase, to = ?phase, "carousel phase");
            self.phase = phase;
        }
    }
}

impl<T> std::fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("len", &self.items.len())
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("external", &self.external)
            .finish_non_exhaustive()
    }
}
