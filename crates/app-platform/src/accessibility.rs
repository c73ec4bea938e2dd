//! Screen reader announcements

use tracing::debug;

/// Assistive-technology announcer
///
/// Messages are spoken by the platform screen reader (VoiceOver, TalkBack)
/// without moving focus.
pub trait Announcer {
    /// Queue a message for the screen reader
    fn announce(&self, message: &str);
}

/// Announcer that drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&self, _message: &str) {}
}

/// Announcer that writes messages to the debug log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, message: &str) {
        debug!(message, "accessibility announcement");
    }
}

impl<A: Announcer + ?Sized> Announcer for Box<A> {
    fn announce(&self, message: &str) {
        (**self).announce(message)
    }
}

impl<A: Announcer + ?Sized> Announcer for std::rc::Rc<A> {
    fn announce(&self, message: &str) {
        (**self).announce(message)
    }
}
