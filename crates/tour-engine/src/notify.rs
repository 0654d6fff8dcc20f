//! The notification state machine.

use tour_core::{StopId, Timestamp};

/// Why a displayed notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// The visitor pressed dismiss.
    Dismissed,
    /// The visitor opened the stop from the notification.
    Opened,
    /// The auto-dismiss timer fired.
    TimedOut,
}

/// A notification currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub stop:  StopId,
    /// When the notification was raised — the auto-dismiss deadline is
    /// `since + notify_timeout_ms`.
    pub since: Timestamp,
}

/// Display state of the proximity notification.
///
/// A tagged state machine rather than a pair of booleans: `Displaying` can
/// hold at most one stop, which structurally enforces the
/// one-active-notification-at-a-time invariant, and every clearing path
/// (explicit dismiss, open, timer) funnels through [`clear`][Self::clear] so
/// the timer and an explicit action can never both "resolve" the same
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    Idle,
    Displaying(Notification),
}

impl NotificationState {
    /// `true` while a notification is on screen.
    #[inline]
    pub fn is_displaying(&self) -> bool {
        matches!(self, NotificationState::Displaying(_))
    }

    /// The stop currently displayed, if any.
    pub fn displayed(&self) -> Option<Notification> {
        match self {
            NotificationState::Idle          => None,
            NotificationState::Displaying(n) => Some(*n),
        }
    }

    /// Transition `Idle → Displaying`.
    ///
    /// Returns `false` (and changes nothing) if a notification is already on
    /// screen — the arbitration step must not stack a second one.
    pub fn raise(&mut self, stop: StopId, now: Timestamp) -> bool {
        match self {
            NotificationState::Displaying(_) => false,
            NotificationState::Idle => {
                *self = NotificationState::Displaying(Notification { stop, since: now });
                true
            }
        }
    }

    /// Transition `Displaying → Idle`, returning the notification that was
    /// cleared.  A no-op (`None`) when already idle, which is what makes the
    /// timeout-vs-explicit-action race exactly-once: whichever path runs
    /// second finds `Idle` and does nothing.
    pub fn clear(&mut self) -> Option<Notification> {
        match std::mem::take(self) {
            NotificationState::Idle          => None,
            NotificationState::Displaying(n) => Some(n),
        }
    }

    /// `true` if the displayed notification has outlived `timeout_ms` at
    /// `now`.  Always `false` when idle.
    pub fn expired(&self, now: Timestamp, timeout_ms: u64) -> bool {
        match self {
            NotificationState::Idle          => false,
            NotificationState::Displaying(n) => now.since(n.since) >= timeout_ms,
        }
    }
}
