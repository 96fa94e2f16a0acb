// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct, its `ToastKind` and the
//! `ToastId` handed back to callers so they can dismiss early.

use crate::ui::theming::ColorScheme;
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Unique identifier for a toast.
///
/// Ids come from a process-wide counter, so two toasts never share one even
/// when they are created through different shell handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates the next unused id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of feedback, which drives the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// Accent color of this kind in the given scheme.
    #[must_use]
    pub fn accent(self, colors: &ColorScheme) -> Color {
        match self {
            ToastKind::Success => colors.success,
            ToastKind::Error => colors.error,
            ToastKind::Info => colors.info,
        }
    }

    /// Single glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
            ToastKind::Info => "i",
        }
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    title: String,
    message: Option<String>,
    created_at: Instant,
}

impl Toast {
    /// Creates a toast with an id allocated elsewhere (e.g. by a shell handle).
    pub fn with_id(id: ToastId, kind: ToastKind, title: impl Into<String>, at: Instant) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            message: None,
            created_at: at,
        }
    }

    /// Sets the body text when one is given; `None` leaves it empty.
    #[must_use]
    pub fn with_optional_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
