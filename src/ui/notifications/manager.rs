// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the active toasts in insertion order and a
//! [`DismissSchedule`] holding one pending removal per toast. A toast leaves
//! the collection exactly once: either a manual dismissal cancels its
//! scheduled removal, or the removal fires on a tick and the entry is gone.

use super::delay::DismissDelay;
use super::schedule::DismissSchedule;
use super::toast::{Toast, ToastId, ToastKind};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Active toasts, oldest first.
    active: Vec<Toast>,
    schedule: DismissSchedule,
    delay: DismissDelay,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delay(delay: DismissDelay) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Creates a toast and schedules its removal `delay` after `now`.
    pub fn notify(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        now: Instant,
    ) -> ToastId {
        let toast = Toast::with_id(ToastId::next(), kind, title, now).with_optional_message(message);
        self.push(toast)
    }

    /// Appends an already built toast and schedules its removal relative to
    /// its creation instant.
    ///
    /// A toast whose id is already active is ignored; the existing entry and
    /// its schedule are kept.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = toast.id();
        if self.contains(id) {
            tracing::debug!(%id, "toast already active, ignoring duplicate");
            return id;
        }

        let deadline = toast.created_at() + self.delay.as_duration();
        tracing::debug!(%id, kind = ?toast.kind(), title = toast.title(), "toast shown");
        self.schedule.schedule(id, deadline);
        self.active.push(toast);
        id
    }

    /// Dismisses a toast by its ID and cancels its scheduled removal.
    ///
    /// Returns `true` if the toast was found and removed. Unknown ids are a
    /// no-op, which covers a click racing the automatic removal.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.schedule.cancel(id);
        let Some(pos) = self.active.iter().position(|t| t.id() == id) else {
            return false;
        };
        self.active.remove(pos);
        tracing::debug!(%id, "toast dismissed");
        true
    }

    /// Removes every toast whose deadline is at or before `now`.
    ///
    /// Returns the number of toasts removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.schedule.take_due(now);
        let before = self.active.len();
        self.active.retain(|t| !due.contains(&t.id()));
        let removed = before - self.active.len();
        if removed > 0 {
            tracing::debug!(removed, "toasts expired");
        }
        removed
    }

    /// Active toasts in display order (oldest first).
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.active.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether any removal is still pending; drives the tick subscription.
    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        !self.schedule.is_empty()
    }

    #[must_use]
    pub fn is_removal_scheduled(&self, id: ToastId) -> bool {
        self.schedule.is_scheduled(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(!manager.has_pending_removals());
    }

    #[test]
    fn notify_appends_in_insertion_order() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let first = manager.notify(ToastKind::Info, "first", None, now);
        let second = manager.notify(ToastKind::Success, "second", None, now);

        let ids: Vec<ToastId> = manager.active().map(Toast::id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn dismiss_removes_and_cancels_timer() {
        let mut manager = Manager::new();
        let id = manager.notify(ToastKind::Info, "test", None, Instant::now());
        assert!(manager.is_removal_scheduled(id));

        assert!(manager.dismiss(id));
        assert_eq!(manager.len(), 0);
        assert!(!manager.is_removal_scheduled(id));
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = ToastId::next();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_removes_expired_toasts_once() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.notify(ToastKind::Info, "old", None, start);
        let fresh = manager.notify(ToastKind::Info, "fresh", None, start + secs(3));

        assert_eq!(manager.tick(start + secs(4)), 0);
        assert_eq!(manager.tick(start + secs(5)), 1);
        assert_eq!(manager.tick(start + secs(5)), 0);

        let remaining: Vec<ToastId> = manager.active().map(Toast::id).collect();
        assert_eq!(remaining, vec![fresh]);

        assert_eq!(manager.tick(start + secs(8)), 1);
        assert!(manager.is_empty());
        assert!(!manager.has_pending_removals());
    }

    #[test]
    fn dismiss_after_timeout_is_a_noop() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.notify(ToastKind::Error, "boom", None, start);

        manager.tick(start + secs(5));
        assert!(!manager.dismiss(id));
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn custom_delay_is_applied() {
        let mut manager = Manager::with_delay(DismissDelay::new(2));
        let start = Instant::now();
        manager.notify(ToastKind::Info, "short", None, start);

        assert_eq!(manager.tick(start + secs(2)), 1);
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let mut manager = Manager::new();
        let toast = Toast::with_id(ToastId::next(), ToastKind::Info, "once", Instant::now());
        let id = manager.push(toast.clone());
        assert_eq!(manager.push(toast), id);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn active_count_tracks_issued_minus_removed() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let mut issued = 0usize;
        let mut removed = 0usize;
        let mut ids = Vec::new();

        for step in 0..20u64 {
            let now = start + Duration::from_millis(step * 700);
            ids.push(manager.notify(ToastKind::Info, format!("t{step}"), None, now));
            issued += 1;

            if step % 3 == 0 {
                if let Some(id) = ids.first().copied() {
                    if manager.dismiss(id) {
                        removed += 1;
                    }
                    ids.remove(0);
                }
            }
            removed += manager.tick(now);

            assert_eq!(manager.len(), issued - removed);
        }
    }
}
