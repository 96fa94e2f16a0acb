// SPDX-License-Identifier: MPL-2.0
//! Pending automatic removals, keyed by toast id.
//!
//! Each scheduled entry is a cancellable deferred task: it either fires once
//! when its deadline passes or is cancelled by a manual dismissal. Firing
//! removes the entry, so no id is ever reported twice.

use super::toast::ToastId;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct DismissSchedule {
    deadlines: HashMap<ToastId, Instant>,
}

impl DismissSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the removal of `id` at `deadline`, replacing any earlier entry.
    pub fn schedule(&mut self, id: ToastId, deadline: Instant) {
        self.deadlines.insert(id, deadline);
    }

    /// Cancels the pending removal of `id`.
    ///
    /// Returns `false` if nothing was scheduled (already fired or cancelled).
    pub fn cancel(&mut self, id: ToastId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    /// Removes and returns every entry whose deadline is at or before `now`,
    /// earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due: Vec<(Instant, ToastId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }

        due.into_iter().map(|(_, id)| id).collect()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: ToastId) -> bool {
        self.deadlines.contains_key(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn due_entries_fire_once() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let id = ToastId::next();
        schedule.schedule(id, start + Duration::from_secs(5));

        assert!(schedule.take_due(start + Duration::from_secs(4)).is_empty());
        assert_eq!(schedule.take_due(start + Duration::from_secs(5)), vec![id]);
        assert!(schedule.take_due(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let id = ToastId::next();
        schedule.schedule(id, start);

        assert!(schedule.cancel(id));
        assert!(!schedule.cancel(id));
        assert!(schedule.take_due(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn due_entries_come_out_earliest_first() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let late = ToastId::next();
        let early = ToastId::next();
        schedule.schedule(late, start + Duration::from_secs(3));
        schedule.schedule(early, start + Duration::from_secs(1));

        assert_eq!(
            schedule.take_due(start + Duration::from_secs(3)),
            vec![early, late]
        );
        assert!(schedule.is_empty());
    }
}
