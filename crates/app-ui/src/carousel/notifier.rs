//! Change notification
//!
//! Emits one [`ChangeEvent`] per distinct active index, forwards it to the
//! registered consumer and announces the new selection to screen readers.

use app_platform::{Announcer, SilentAnnouncer};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::state::SelectionState;
use super::CarouselItem;

/// Why the active item changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeReason {
    /// Provisional change while the strip is being dragged
    Scroll,
    /// The strip settled on an item after a gesture
    Snap,
    /// The user tapped an item
    Click,
    /// Arrow/Home/End key navigation
    Keyboard,
    /// The host selected an item directly
    Programmatic,
}

impl ChangeReason {
    /// Lowercase tag used in logs and analytics
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeReason::Scroll => "scroll",
            ChangeReason::Snap => "snap",
            ChangeReason::Click => "click",
            ChangeReason::Keyboard => "keyboard",
            ChangeReason::Programmatic => "programmatic",
        }
    }
}

impl std::fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change of the active item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent<'a, T> {
    /// Newly active index
    pub active_index: usize,
    /// Previously notified index (equal to `active_index` for the first event)
    pub previous_index: usize,
    /// Item at `active_index`
    pub active_item: &'a T,
    /// What caused the change
    pub reason: ChangeReason,
}

/// Consumer callback for change events
pub type ChangeCallback<T> = Box<dyn for<'a> FnMut(&ChangeEvent<'a, T>)>;

/// Screen reader label for an item, e.g. "Leo, 5 of 12"
pub fn accessibility_label(label: &str, index: usize, total: usize) -> String {
    format!("{}, {} of {}", label, index + 1, total)
}

/// Announcement for a newly selected item, e.g. "Leo selected, 5 of 12"
pub fn selection_announcement(label: &str, index: usize, total: usize) -> String {
    format!("{} selected, {} of {}", label, index + 1, total)
}

/// De-duplicating change notifier
pub struct Notifier<T> {
    callback: Option<ChangeCallback<T>>,
    announcer: Box<dyn Announcer>,
}

impl<T: CarouselItem> Notifier<T> {
    /// Create a notifier with no consumer and a silent announcer
    pub fn new() -> Self {
        Self {
            callback: None,
            announcer: Box::new(SilentAnnouncer),
        }
    }

    /// Register the consumer callback, replacing any previous one
    pub fn set_callback(&mut self, callback: ChangeCallback<T>) {
        self.callback = Some(callback);
    }

    /// Remove the consumer callback
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Replace the screen reader announcer
    pub fn set_announcer(&mut self, announcer: Box<dyn Announcer>) {
        self.announcer = announcer;
    }

    /// Emit a change to `new_index` unless it was the last index emitted
    ///
    /// Returns whether an event was emitted. `new_index` must address an
    /// item in `items`.
    pub fn notify(
        &mut self,
        new_index: usize,
        reason: ChangeReason,
        state: &mut SelectionState,
        items: &[T],
    ) -> bool {
        if state.last_notified_index() == Some(new_index) {
            trace!(index = new_index, %reason, "duplicate change suppressed");
            return false;
        }
        let Some(item) = items.get(new_index) else {
            warn!(index = new_index, count = items.len(), "change for missing item ignored");
            return false;
        };

        let previous_index = state.mark_notified(new_index).unwrap_or(new_index);
        let event = ChangeEvent {
            active_index: new_index,
            previous_index,
            active_item: item,
            reason,
        };
        debug!(
            active = new_index,
            previous = previous_index,
            item = item.id(),
            %reason,
            "active item changed"
        );

        if let Some(callback) = self.callback.as_mut() {
            callback(&event);
        }
        self.announcer
            .announce(&selection_announcement(item.label(), new_index, items.len()));
        true
    }
}

impl<T: CarouselItem> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}
