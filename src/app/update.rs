// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the message handlers that translate component
//! events into shell operations and asynchronous tasks.

use super::message::AccountData;
use super::route::Route;
use super::Message;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::services::{SubscriptionInfo, UsageService, UsageStats, User};
use crate::shell::{HookEvent, Installation, Shell, ShellRequest};
use crate::ui::login;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{NotificationMessage, ToastKind};
use crate::ui::pages;
use iced::{Point, Size, Task};
use std::sync::Arc;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub shell: &'a mut Shell,
    pub login: &'a mut login::State,
    pub window_size: &'a mut Size,
    pub cursor: &'a mut Option<Point>,
    pub usage: &'a mut Option<UsageStats>,
    pub subscription: &'a mut Option<SubscriptionInfo>,
}

impl UpdateContext<'_> {
    /// Drops data belonging to the previous user.
    fn forget_account(&mut self) {
        *self.usage = None;
        *self.subscription = None;
    }
}

/// Fetches usage and subscription for `user` off the update loop.
pub fn load_account_task(usage: Arc<dyn UsageService>, user: User) -> Task<Message> {
    Task::perform(
        async move {
            let result = load_account(usage.as_ref(), &user);
            (user, result)
        },
        |(user, result)| Message::AccountLoaded(user, result),
    )
}

fn load_account(usage: &dyn UsageService, user: &User) -> Result<AccountData> {
    Ok(AccountData {
        usage: usage.load_usage_stats(user)?,
        subscription: usage.load_subscription(user)?,
    })
}

/// Starts an account refresh when someone is signed in.
fn refresh_account(ctx: &UpdateContext<'_>) -> Task<Message> {
    match ctx.shell.current_user() {
        Some(user) => load_account_task(ctx.shell.services().usage.clone(), user),
        None => Task::none(),
    }
}

/// Navigates and refreshes account data when landing on the account page.
fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    ctx.shell.navigate(route);
    if route == Route::Account {
        refresh_account(ctx)
    } else {
        Task::none()
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(route) => navigate(ctx, route),
        NavbarEvent::ToggleTheme => {
            ctx.shell.toggle_theme();
            Task::none()
        }
        NavbarEvent::ToggleUserMenu => {
            ctx.shell.toggle_user_menu();
            Task::none()
        }
        NavbarEvent::CloseUserMenu => {
            ctx.shell.close_user_menu();
            Task::none()
        }
        NavbarEvent::SignOut => {
            ctx.shell.sign_out(ctx.i18n);
            ctx.forget_account();
            ctx.login.reset();
            Task::none()
        }
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    match message {
        NotificationMessage::Dismiss(id) => {
            ctx.shell.dismiss(id);
        }
    }
    Task::none()
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match ctx.login.update(message) {
        login::Event::None => Task::none(),
        login::Event::Submit { username, plan } => {
            match ctx.shell.sign_in(&username, plan, ctx.i18n) {
                Some(user) => {
                    ctx.login.reset();
                    ctx.forget_account();
                    load_account_task(ctx.shell.services().usage.clone(), user)
                }
                None => Task::none(),
            }
        }
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    let user = ctx.shell.current_user();
    pages::update(message, ctx.shell.handle(), user.as_ref(), ctx.i18n);
    Task::none()
}

pub fn handle_hook_event(ctx: &mut UpdateContext<'_>, event: HookEvent) -> Task<Message> {
    match event {
        HookEvent::Ready(handle) => {
            match ctx.shell.install_hooks(handle) {
                Installation::Installed | Installation::Replaced => {
                    tracing::debug!("shell handle bound");
                }
                Installation::AlreadyInstalled => {
                    tracing::warn!("second shell handle ignored");
                }
            }
            Task::none()
        }
        HookEvent::Request(ShellRequest::Open(route)) => navigate(ctx, route),
        HookEvent::Request(request) => {
            ctx.shell.handle_request(request);
            Task::none()
        }
    }
}

/// Closes the user menu when the press landed outside it.
///
/// A press before any cursor movement was seen has no known position and
/// leaves the menu alone.
pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(position) = *ctx.cursor {
        ctx.shell.close_menus_on_outside_click(position);
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    ctx.shell.resize(size);
    Task::none()
}

/// Applies account data, unless it was fetched for someone who is no longer
/// signed in.
pub fn handle_account_loaded(
    ctx: &mut UpdateContext<'_>,
    user: &User,
    result: std::result::Result<AccountData, Error>,
) -> Task<Message> {
    if ctx.shell.current_user().as_ref() != Some(user) {
        tracing::debug!(username = %user.username, "dropping account data for signed-out user");
        return Task::none();
    }

    match result {
        Ok(data) => {
            *ctx.usage = Some(data.usage);
            *ctx.subscription = Some(data.subscription);
        }
        Err(error) => {
            tracing::warn!(%error, "failed to load account data");
            ctx.shell.notify(
                ToastKind::Error,
                ctx.i18n.tr("toast-account-load-failed-title"),
                Some(ctx.i18n.tr(error.i18n_key())),
            );
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::Plan;
    use crate::services::usage::LocalUsage;

    #[test]
    fn load_account_combines_usage_and_subscription() {
        let usage = LocalUsage::new(None);
        let user = User {
            username: "alice".into(),
            plan: Plan::Premium,
        };
        let data = load_account(&usage, &user).expect("account data");
        assert_eq!(data.usage.limits.lookups, 10_000);
        assert_eq!(data.subscription.plan, Plan::Premium);
    }
}
