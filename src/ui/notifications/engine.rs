// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Engine` owns the live notification queue and the expiry timers.
//! All mutations go through `enqueue`, `dismiss`, `clear_all` and the timer
//! driver `expire_due`, which the application calls from its update loop.

use super::notification::{Descriptor, Notification, NotificationId, ValidationError};
use super::timer::Timers;
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Monotonic counter bumped on every observable change of the queue.
pub type Revision = u64;

/// Messages emitted by the notification surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button on a toast or history entry.
    Dismiss(NotificationId),
    /// Action button on a toast.
    ActivateAction(NotificationId),
    /// "Clear all" in the bell dropdown.
    ClearAll,
}

/// Ordered queue of live notifications with cancelable expiry timers.
///
/// `A` is the action payload handed back when a notification's action
/// button is activated.
#[derive(Debug)]
pub struct Engine<A> {
    /// Live notifications in insertion order.
    queue: Vec<Notification<A>>,
    timers: Timers,
    next_id: u64,
    default_duration: Duration,
    revision: Revision,
    changes: watch::Sender<Revision>,
}

impl<A> Default for Engine<A> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

impl<A> Engine<A> {
    /// Creates an empty engine. `default_duration` applies to descriptors
    /// that leave `duration_ms` unset.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            queue: Vec::new(),
            timers: Timers::new(),
            next_id: 0,
            default_duration,
            revision: 0,
            changes,
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Enqueues a notification using the current time.
    pub fn enqueue(&mut self, descriptor: Descriptor<A>) -> Result<NotificationId, ValidationError> {
        self.enqueue_at(descriptor, Instant::now())
    }

    /// Enqueues a notification created at `now`.
    ///
    /// The notification is appended to the end of the queue and, unless it
    /// is persistent, a timer is scheduled to remove it after its lifetime.
    pub fn enqueue_at(
        &mut self,
        descriptor: Descriptor<A>,
        now: Instant,
    ) -> Result<NotificationId, ValidationError> {
        let lifetime = match descriptor.validate(self.default_duration) {
            Ok(lifetime) => lifetime,
            Err(err) => {
                tracing::warn!(title = %descriptor.title, error = %err, "rejected notification");
                return Err(err);
            }
        };

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        if let Some(lifetime) = lifetime {
            self.timers.schedule(id, now + lifetime);
        }

        tracing::debug!(
            %id,
            kind = descriptor.kind.as_str(),
            lifetime_ms = lifetime.map_or(0, |d| d.as_millis() as u64),
            "notification enqueued"
        );

        self.queue
            .push(Notification::from_descriptor(id, descriptor, lifetime, now));
        self.publish();
        Ok(id)
    }

    /// Removes a notification and cancels its timer.
    ///
    /// Returns `true` if the notification was live. Dismissing an unknown or
    /// already removed id is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.timers.cancel(id);
        match self.queue.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.queue.remove(pos);
                tracing::debug!(%id, "notification dismissed");
                self.publish();
                true
            }
            None => false,
        }
    }

    /// Removes every notification and cancels every pending timer.
    pub fn clear_all(&mut self) {
        let cancelled = self.timers.len();
        self.timers.cancel_all();
        if self.queue.is_empty() {
            return;
        }
        tracing::debug!(count = self.queue.len(), cancelled, "notifications cleared");
        self.queue.clear();
        self.publish();
    }

    /// Fires every timer due at `now`, removing the expired notifications.
    ///
    /// Returns the expired ids, earliest deadline first.
    pub fn expire_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let fired = self.timers.take_due(now);
        if fired.is_empty() {
            return fired;
        }
        self.queue.retain(|n| !fired.contains(&n.id()));
        tracing::debug!(count = fired.len(), "notifications expired");
        self.publish();
        fired
    }

    /// Live notifications in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Notification<A>] {
        &self.queue
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification<A>> {
        self.queue.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending expiry, if any notification can still expire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Current revision. Changes whenever the queue does.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Subscribes to queue changes. The receiver observes the latest revision.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.changes.subscribe()
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.changes.send_replace(self.revision);
    }
}

impl<A: Clone> Engine<A> {
    /// Returns the action payload of a live notification.
    ///
    /// Activation does not remove the notification.
    #[must_use]
    pub fn activate(&self, id: NotificationId) -> Option<A> {
        self.get(id)
            .and_then(|n| n.action())
            .map(|action| action.payload.clone())
    }

    /// Handles a notification surface message, returning the activated
    /// action payload if there is one.
    pub fn handle_message(&mut self, message: Message) -> Option<A> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
                None
            }
            Message::ActivateAction(id) => self.activate(id),
            Message::ClearAll => {
                self.clear_all();
                None
            }
        }
    }
}
