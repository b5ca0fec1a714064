// SPDX-License-Identifier: MPL-2.0
//! Keyed table of cancelable delayed actions.
//!
//! The registry keeps at most one pending action per key. Scheduling under a
//! key that already has a pending action hands the old action back to the
//! caller before installing the new one, so the old action can never fire.
//! Every coordinator relies on this to make the latest call on a key win.
//!
//! Time is logical. The registry never reads the wall clock: its `now` only
//! moves forward through [`TimerRegistry::pop_due`] and
//! [`TimerRegistry::settle`].

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<A> {
    due: Instant,
    seq: u64,
    action: A,
}

/// Delayed actions keyed by `K`, fired in `(due, schedule order)` order.
#[derive(Debug)]
pub struct TimerRegistry<K, A> {
    now: Instant,
    next_seq: u64,
    pending: HashMap<K, Pending<A>>,
    /// Firing order index over `pending`.
    queue: BTreeMap<(Instant, u64), K>,
}

impl<K, A> TimerRegistry<K, A>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates an empty registry whose logical clock starts at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_seq: 0,
            pending: HashMap::new(),
            queue: BTreeMap::new(),
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Schedules `action` to fire `delay` after the current logical time.
    ///
    /// Returns the action previously pending under `key`, if any. That
    /// action is removed from the registry and will never fire.
    pub fn schedule(&mut self, key: K, delay: Duration, action: A) -> Option<A> {
        let displaced = self.cancel(&key);

        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;

        tracing::trace!(?key, ?delay, seq, "timer scheduled");
        self.queue.insert((due, seq), key.clone());
        self.pending.insert(key, Pending { due, seq, action });

        displaced
    }

    /// Cancels the action pending under `key`.
    ///
    /// Unknown keys are a no-op and return `None`.
    pub fn cancel(&mut self, key: &K) -> Option<A> {
        let pending = self.pending.remove(key)?;
        self.queue.remove(&(pending.due, pending.seq));
        tracing::trace!(?key, "timer canceled");
        Some(pending.action)
    }

    /// Returns true if an action is pending under `key`.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Due instant of the action pending under `key`.
    #[must_use]
    pub fn due_at(&self, key: &K) -> Option<Instant> {
        self.pending.get(key).map(|p| p.due)
    }

    /// Due instant of the earliest pending action.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Removes and returns the earliest action due at or before `until`.
    ///
    /// The logical clock moves to that action's due instant, so anything
    /// scheduled while handling it is relative to when it was due.
    pub fn pop_due(&mut self, until: Instant) -> Option<(K, A)> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }

        let key = self.queue.remove(&(due, seq))?;
        let pending = self.pending.remove(&key)?;
        if due > self.now {
            self.now = due;
        }
        tracing::trace!(?key, seq, "timer fired");
        Some((key, pending.action))
    }

    /// Moves the logical clock forward to `until` without firing anything.
    ///
    /// Moving backwards is ignored.
    pub fn settle(&mut self, until: Instant) {
        if until > self.now {
            self.now = until;
        }
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
