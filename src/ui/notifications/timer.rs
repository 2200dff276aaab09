// SPDX-License-Identifier: MPL-2.0
//! Cancelable one-shot expiry timers.
//!
//! Each live notification with a lifetime owns one entry, keyed by id.
//! Removing the entry is the cancellation: a timer that is no longer in the
//! table can never fire.

use super::notification::NotificationId;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

/// Deadline-ordered timer table.
#[derive(Debug, Default)]
pub struct Timers {
    by_id: HashMap<NotificationId, Instant>,
    by_deadline: BTreeSet<(Instant, NotificationId)>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` to fire at `deadline`, replacing any earlier schedule.
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant) {
        self.cancel(id);
        self.by_id.insert(id, deadline);
        self.by_deadline.insert((deadline, id));
    }

    /// Cancels the timer for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        match self.by_id.remove(&id) {
            Some(deadline) => {
                self.by_deadline.remove(&(deadline, id));
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.by_id.clear();
        self.by_deadline.clear();
    }

    /// Removes and returns every timer due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut fired = Vec::new();
        while let Some(&(deadline, id)) = self.by_deadline.first() {
            if deadline > now {
                break;
            }
            self.by_deadline.pop_first();
            self.by_id.remove(&id);
            fired.push(id);
        }
        fired
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.by_deadline.first().map(|&(deadline, _)| deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(id(1), t0 + Duration::from_millis(300));
        timers.schedule(id(2), t0 + Duration::from_millis(100));
        timers.schedule(id(3), t0 + Duration::from_millis(200));

        assert_eq!(timers.take_due(t0 + Duration::from_millis(250)), vec![id(2), id(3)]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(id(1), t0 + Duration::from_millis(10));

        assert!(timers.cancel(id(1)));
        assert!(!timers.cancel(id(1)));
        assert!(timers.take_due(t0 + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn reschedule_replaces_previous_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(id(1), t0 + Duration::from_millis(10));
        timers.schedule(id(1), t0 + Duration::from_millis(500));

        assert!(timers.take_due(t0 + Duration::from_millis(100)).is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn deadline_equal_to_now_is_due() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(id(4), t0);
        assert_eq!(timers.take_due(t0), vec![id(4)]);
        assert!(timers.is_empty());
    }

    #[test]
    fn cancel_all_clears_everything() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        for raw in 0..5 {
            timers.schedule(id(raw), t0 + Duration::from_millis(raw * 10));
        }
        timers.cancel_all();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
        assert!(!timers.cancel(id(0)));
    }
}
