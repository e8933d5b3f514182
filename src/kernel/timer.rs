//! Cancellable deferred tasks driven by an external clock.

use slotmap::{new_key_type, SlotMap};
use std::time::{Duration, Instant};

new_key_type! {
    pub struct TimerKey;
}

#[derive(Debug)]
struct Entry<T> {
    deadline: Instant,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: SlotMap<TimerKey, Entry<T>>,
    seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: SlotMap::with_key(),
            seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerKey {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        self.entries.insert(Entry {
            deadline: now + delay,
            seq,
            task,
        })
    }

    pub fn cancel(&mut self, key: TimerKey) -> Option<T> {
        self.entries.remove(key).map(|e| e.task)
    }

    /// Drops every pending task. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|e| e.deadline).min()
    }

    /// Removes and returns the tasks due at `now`, earliest deadline first;
    /// ties keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(Instant, u64, TimerKey)> = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(key, e)| (e.deadline, e.seq, key))
            .collect();
        due.sort_unstable_by_key(|&(deadline, seq, _)| (deadline, seq));

        due.into_iter()
            .filter_map(|(_, _, key)| self.entries.remove(key).map(|e| e.task))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/timer.rs"]
mod tests;
