//! Transient notification channel.
//!
//! # Design
//! - At most one notification is live; a new one replaces the old.
//! - Every notification carries a generation ticket; the view arms one timer
//!   per ticket and expiring a superseded ticket is a no-op.
//! - The deadline is `created_at + NOTIFICATION_TTL_MS`; the view only turns
//!   [`Notification::remaining_ms`] into a timer.

use chrono::{DateTime, Duration, Utc};

use crate::core::config::NOTIFICATION_TTL_MS;

/// Visual tone of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

impl NotificationKind {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Generation ticket identifying one notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeTicket(u64);

/// A live notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Tone.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
    /// When it was raised.
    pub created_at: DateTime<Utc>,
    /// Generation ticket used to expire it.
    pub ticket: NoticeTicket,
}

impl Notification {
    /// Instant at which the notification is taken down.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(i64::from(NOTIFICATION_TTL_MS))
    }

    /// Milliseconds left before expiry as of `now`, zero once overdue.
    #[must_use]
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> u32 {
        let left = (self.expires_at() - now)
            .num_milliseconds()
            .clamp(0, i64::from(NOTIFICATION_TTL_MS));
        u32::try_from(left).unwrap_or(0)
    }
}

/// Holder of the single live notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationChannel {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationChannel {
    /// Replace the current notification.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> NoticeTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = NoticeTicket(self.generation);
        self.current = Some(Notification {
            kind,
            message: message.into(),
            created_at: Utc::now(),
            ticket,
        });
        ticket
    }

    /// Expire the notification raised with `ticket`, if it is still current.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if self.current.as_ref().is_some_and(|live| live.ticket == ticket) {
            self.current = None;
            return true;
        }
        false
    }

    /// Dismiss whatever is showing before its timer fires.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Deadline for `ticket`, or `None` once it has been superseded or cleared.
    #[must_use]
    pub fn expires_at(&self, ticket: NoticeTicket) -> Option<DateTime<Utc>> {
        self.current
            .as_ref()
            .filter(|live| live.ticket == ticket)
            .map(Notification::expires_at)
    }

    /// The live notification, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notification_replaces_older() {
        let mut channel = NotificationChannel::default();
        channel.notify(NotificationKind::Success, "Selected customers deleted.");
        channel.notify(NotificationKind::Error, "Failed to fetch users");

        let live = channel.current().expect("live notification");
        assert_eq!(live.kind, NotificationKind::Error);
        assert_eq!(live.message, "Failed to fetch users");
    }

    #[test]
    fn stale_ticket_expiry_is_a_no_op() {
        let mut channel = NotificationChannel::default();
        let first = channel.notify(NotificationKind::Success, "one");
        let second = channel.notify(NotificationKind::Success, "two");

        assert!(!channel.expire(first));
        assert_eq!(channel.current().map(|n| n.message.as_str()), Some("two"));
        assert!(channel.expire(second));
        assert!(channel.current().is_none());
        assert!(!channel.expire(second));
    }

    #[test]
    fn notifications_live_for_two_and_a_half_seconds() {
        let mut channel = NotificationChannel::default();
        let ticket = channel.notify(NotificationKind::Success, "Customer saved.");
        let live = channel.current().cloned().expect("live notification");

        let deadline = channel.expires_at(ticket).expect("deadline");
        assert_eq!(deadline - live.created_at, Duration::milliseconds(2_500));
        assert_eq!(live.remaining_ms(live.created_at), 2_500);
        assert_eq!(
            live.remaining_ms(live.created_at + Duration::milliseconds(1_000)),
            1_500
        );
        assert_eq!(live.remaining_ms(deadline + Duration::seconds(1)), 0);
    }

    #[test]
    fn newer_notification_supersedes_the_earlier_deadline() {
        let mut channel = NotificationChannel::default();
        let first = channel.notify(NotificationKind::Error, "Failed to fetch users");
        let first_deadline = channel.expires_at(first).expect("first deadline");

        let second = channel.notify(NotificationKind::Success, "Selected users deleted.");
        let second_deadline = channel.expires_at(second).expect("second deadline");

        assert_eq!(channel.expires_at(first), None);
        assert!(second_deadline >= first_deadline);
        assert!(!channel.expire(first));
        assert!(channel.current().is_some());
    }

    #[test]
    fn dismiss_clears_before_the_timer_fires() {
        let mut channel = NotificationChannel::default();
        let ticket = channel.notify(NotificationKind::Success, "Customer saved.");

        channel.dismiss();

        assert!(channel.current().is_none());
        assert_eq!(channel.expires_at(ticket), None);
        assert!(!channel.expire(ticket));
    }
}
