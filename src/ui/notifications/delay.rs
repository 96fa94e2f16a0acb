// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss window for toasts.

use crate::config::{DEFAULT_DISMISS_AFTER_SECS, MAX_DISMISS_AFTER_SECS, MIN_DISMISS_AFTER_SECS};
use std::time::Duration;

/// Time a toast stays visible before automatic removal, in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use binsearch_shell::ui::notifications::DismissDelay;
///
/// let delay = DismissDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(DismissDelay::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u32);

impl DismissDelay {
    /// Creates a new delay value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_DISMISS_AFTER_SECS, MAX_DISMISS_AFTER_SECS))
    }

    /// Builds the delay from the optional config value.
    #[must_use]
    pub fn from_config(value: Option<u32>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_AFTER_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(DismissDelay::new(0).value(), MIN_DISMISS_AFTER_SECS);
        assert_eq!(DismissDelay::new(1000).value(), MAX_DISMISS_AFTER_SECS);
    }

    #[test]
    fn default_returns_five_seconds() {
        assert_eq!(DismissDelay::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn from_config_falls_back_to_default() {
        assert_eq!(DismissDelay::from_config(None), DismissDelay::default());
        assert_eq!(DismissDelay::from_config(Some(12)).value(), 12);
    }
}
