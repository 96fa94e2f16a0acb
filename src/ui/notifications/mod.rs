// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions (sign-in,
//! sign-out, failures) without blocking interaction.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with its kind and id
//! - [`manager`] - `Manager` owning the active collection and removals
//! - [`schedule`] - `DismissSchedule`, the pending removals keyed by id
//! - [`delay`] - `DismissDelay`, the configurable auto-dismiss window
//! - [`overlay`] - Widgets rendering the active toasts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, ToastKind};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! let id = manager.notify(ToastKind::Success, "Signed in", None, Instant::now());
//!
//! // In your view function, render toasts
//! let overlay = overlay::view_overlay(&manager, &colors).map(Message::Notification);
//! ```

mod delay;
mod manager;
pub mod overlay;
mod schedule;
mod toast;

pub use delay::DismissDelay;
pub use manager::{Manager, Message as NotificationMessage};
pub use schedule::DismissSchedule;
pub use toast::{Toast, ToastId, ToastKind};
