// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss window
//! - **Locale**: Fallback language
//! - **Window**: Initial and minimum window sizes

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before it is removed (in seconds).
pub const DEFAULT_DISMISS_AFTER_SECS: u32 = 5;

/// Minimum auto-dismiss window (in seconds).
pub const MIN_DISMISS_AFTER_SECS: u32 = 1;

/// Maximum auto-dismiss window (in seconds).
pub const MAX_DISMISS_AFTER_SECS: u32 = 60;

/// Interval of the tick that drives pending removals (in milliseconds).
pub const DISMISS_TICK_MILLIS: u64 = 100;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(MIN_DISMISS_AFTER_SECS <= DEFAULT_DISMISS_AFTER_SECS);
    assert!(DEFAULT_DISMISS_AFTER_SECS <= MAX_DISMISS_AFTER_SECS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
