//! Transient notifications.
//!
//! At most one notification is on screen. It lives through a fixed timeline
//! measured from the moment it was shown:
//!
//! ```text
//! notify ──► Showing ──(5000 ms)──► FadingOut ──(300 ms)──► removed
//! ```
//!
//! A new `notify` call drops the current notification on the spot, whatever
//! its phase. Every notification carries a [`NotificationId`]; a timer that
//! fires for an id which is no longer current does nothing, so the replaced
//! notification's pending transitions can never touch its successor.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Classification of a notification, controlling its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Background color of the toast.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#10B981",
            Severity::Error => "#EF4444",
            Severity::Info => "#6366F1",
        }
    }

    /// Modifier class, e.g. `notification-error`.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

/// Identifies one notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification_{}", self.0)
    }
}

/// A message on its way across the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Wall-clock creation time
    pub created_at: DateTime<Utc>,
    /// Monotonic instant it was shown
    pub shown_at: Duration,
}

/// Visible phase of the current notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing,
    FadingOut,
}

impl Phase {
    /// Animation class for this phase.
    pub fn animation_class(&self) -> &'static str {
        match self {
            Phase::Showing => "notification-enter",
            Phase::FadingOut => "notification-exit",
        }
    }
}

/// How long each phase lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub show_ms: u64,
    pub fade_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl NotificationTimings {
    pub fn show(&self) -> Duration {
        Duration::from_millis(self.show_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Time from `notify` until the notification is gone.
    pub fn lifetime(&self) -> Duration {
        self.show() + self.fade()
    }
}

/// Something that happened to the notification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
    Shown(NotificationId),
    /// The previous notification was dropped without fading out
    Replaced {
        old: NotificationId,
        new: NotificationId,
    },
    FadingOut(NotificationId),
    Removed(NotificationId),
}

#[derive(Debug, Clone)]
struct Live {
    notification: Notification,
    phase: Phase,
    deadline: Duration,
}

/// Owns the single on-screen notification and its timeline.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    next_id: u64,
    live: Option<Live>,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            live: None,
        }
    }

    /// Show `message`, dropping whatever is currently on screen.
    ///
    /// Empty messages are shown as-is.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Duration,
    ) -> (NotificationId, NotificationEvent) {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at: Utc::now(),
            shown_at: now,
        };
        debug!(%id, ?severity, message = %notification.message, "showing notification");

        let previous = self.live.replace(Live {
            notification,
            phase: Phase::Showing,
            deadline: now + self.timings.show(),
        });

        let event = match previous {
            Some(old) => {
                debug!(old = %old.notification.id, new = %id, "replaced notification");
                NotificationEvent::Replaced {
                    old: old.notification.id,
                    new: id,
                }
            }
            None => NotificationEvent::Shown(id),
        };
        (id, event)
    }

    /// A timer scheduled for `id` fired at `now`.
    ///
    /// Stale ids and early wakeups are ignored.
    pub fn on_timer(&mut self, id: NotificationId, now: Duration) -> Option<NotificationEvent> {
        let live = self.live.as_mut()?;
        if live.notification.id != id {
            trace!(%id, current = %live.notification.id, "ignoring stale notification timer");
            return None;
        }
        if now < live.deadline {
            return None;
        }

        match live.phase {
            Phase::Showing => {
                live.phase = Phase::FadingOut;
                // anchored on the previous deadline so a late wakeup doesn't stretch the fade
                live.deadline += self.timings.fade();
                debug!(%id, "notification fading out");
                Some(NotificationEvent::FadingOut(id))
            }
            Phase::FadingOut => {
                self.live = None;
                debug!(%id, "notification removed");
                Some(NotificationEvent::Removed(id))
            }
        }
    }

    /// Run every transition due at `now`, in order.
    pub fn tick(&mut self, now: Duration) -> Vec<NotificationEvent> {
        let mut events = Vec::new();
        while let Some((id, _)) = self.next_deadline().filter(|(_, at)| *at <= now) {
            match self.on_timer(id, now) {
                Some(event) => events.push(event),
                None => break,
            }
        }
        events
    }

    /// The next scheduled transition and the notification it belongs to.
    pub fn next_deadline(&self) -> Option<(NotificationId, Duration)> {
        self.live
            .as_ref()
            .map(|live| (live.notification.id, live.deadline))
    }

    pub fn current(&self) -> Option<&Notification> {
        self.live.as_ref().map(|live| &live.notification)
    }

    pub fn phase(&self) -> Option<Phase> {
        self.live.as_ref().map(|live| live.phase)
    }

    pub fn is_idle(&self) -> bool {
        self.live.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn severity_colors() {
        assert_eq!(Severity::Success.color(), "#10B981");
        assert_eq!(Severity::Error.color(), "#EF4444");
        assert_eq!(Severity::Info.color(), "#6366F1");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn starts_idle() {
        let center = NotificationCenter::default();
        assert!(center.is_idle());
        assert_eq!(center.next_deadline(), None);
    }

    #[test]
    fn untouched_notification_lives_5300ms() {
        let mut center = NotificationCenter::new(NotificationTimings::default());
        let (id, event) = center.notify("hello", Severity::Info, ms(1000));
        assert_eq!(event, NotificationEvent::Shown(id));
        assert_eq!(center.phase(), Some(Phase::Showing));

        assert!(center.tick(ms(5999)).is_empty());
        assert_eq!(center.tick(ms(6000)), vec![NotificationEvent::FadingOut(id)]);
        assert_eq!(center.phase(), Some(Phase::FadingOut));

        assert!(center.tick(ms(6299)).is_empty());
        assert_eq!(center.tick(ms(6300)), vec![NotificationEvent::Removed(id)]);
        assert!(center.is_idle());
    }

    #[test]
    fn late_tick_runs_both_transitions() {
        let mut center = NotificationCenter::default();
        let (id, _) = center.notify("hello", Severity::Success, ms(0));
        assert_eq!(
            center.tick(ms(10_000)),
            vec![NotificationEvent::FadingOut(id), NotificationEvent::Removed(id)]
        );
    }

    #[test]
    fn late_wakeup_does_not_stretch_fade() {
        let mut center = NotificationCenter::default();
        let (id, _) = center.notify("hello", Severity::Info, ms(0));
        center.on_timer(id, ms(5200));
        assert_eq!(center.next_deadline(), Some((id, ms(5300))));
    }

    #[test]
    fn replacement_never_fades_the_old_one() {
        let mut center = NotificationCenter::default();
        let (x, _) = center.notify("x", Severity::Error, ms(0));
        let (y, event) = center.notify("y", Severity::Success, ms(0));
        assert_eq!(event, NotificationEvent::Replaced { old: x, new: y });

        let current = center.current().unwrap();
        assert_eq!(current.message, "y");
        assert_eq!(current.severity, Severity::Success);

        // x's timers are dead
        assert_eq!(center.on_timer(x, ms(5000)), None);
        assert_eq!(center.on_timer(x, ms(5300)), None);
        assert_eq!(center.phase(), Some(Phase::Showing));
    }

    #[test]
    fn replacement_while_fading_restarts_timeline() {
        let mut center = NotificationCenter::default();
        center.notify("first", Severity::Info, ms(0));
        center.tick(ms(5100));
        assert_eq!(center.phase(), Some(Phase::FadingOut));

        let (id, _) = center.notify("second", Severity::Info, ms(5100));
        assert_eq!(center.phase(), Some(Phase::Showing));
        assert_eq!(center.next_deadline(), Some((id, ms(10_100))));
    }

    #[test]
    fn early_timer_is_ignored() {
        let mut center = NotificationCenter::default();
        let (id, _) = center.notify("hello", Severity::Info, ms(0));
        assert_eq!(center.on_timer(id, ms(4999)), None);
        assert_eq!(center.phase(), Some(Phase::Showing));
    }

    #[test]
    fn timer_after_removal_is_harmless() {
        let mut center = NotificationCenter::default();
        let (id, _) = center.notify("hello", Severity::Info, ms(0));
        center.tick(ms(6000));
        assert_eq!(center.on_timer(id, ms(7000)), None);
        assert!(center.is_idle());
    }

    #[test]
    fn empty_message_is_not_validated() {
        let mut center = NotificationCenter::default();
        center.notify("", Severity::Info, ms(0));
        assert_eq!(center.current().unwrap().message, "");
    }

    #[test]
    fn ids_are_unique() {
        let mut center = NotificationCenter::default();
        let (a, _) = center.notify("a", Severity::Info, ms(0));
        let (b, _) = center.notify("b", Severity::Info, ms(0));
        assert_ne!(a, b);
    }
}
