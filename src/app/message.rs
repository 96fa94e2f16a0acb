// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::services::{SubscriptionInfo, UsageStats, User};
use crate::shell::HookEvent;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages;
use iced::{Point, Size};
use std::time::Instant;

/// Usage and subscription fetched together for the account views.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountData {
    pub usage: UsageStats,
    pub subscription: SubscriptionInfo,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    Login(login::Message),
    Page(pages::Message),
    /// Shell handle created, or a request sent through it.
    Hook(HookEvent),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    PointerMoved(Point),
    /// Left button pressed anywhere while the user menu is open.
    PointerPressed,
    WindowResized(Size),
    /// Account data fetched for the given user.
    AccountLoaded(User, Result<AccountData, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the session and usage files).
    /// Takes precedence over `BINSEARCH_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BINSEARCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
