// SPDX-License-Identifier: MPL-2.0
//! The Notification Shell.
//!
//! [`Shell`] owns the active toasts, the user-menu flag and the hook slot,
//! and forwards everything else to the injected [`Services`]. It holds no
//! widgets, so the application's update loop and the tests drive it the
//! same way.
//!
//! # Example
//!
//! ```
//! use binsearch_shell::config::Config;
//! use binsearch_shell::services::Services;
//! use binsearch_shell::shell::Shell;
//! use binsearch_shell::ui::notifications::ToastKind;
//!
//! let mut shell = Shell::new(Services::ephemeral(&Config::default()), &Config::default());
//! let id = shell.notify(ToastKind::Success, "Saved", None);
//! assert!(shell.notifications().contains(id));
//!
//! shell.dismiss(id);
//! assert!(shell.notifications().is_empty());
//! ```

pub mod hooks;

pub use hooks::{HookEvent, Hooks, Installation, ShellHandle, ShellRequest};

use crate::app::route::Route;
use crate::config::defaults::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::services::{Plan, Services, User};
use crate::ui::notifications::{DismissDelay, Manager, Toast, ToastId, ToastKind};
use crate::ui::theming::ThemeMode;
use crate::ui::user_menu::UserMenu;
use iced::{Point, Size};
use std::time::Instant;

#[derive(Debug)]
pub struct Shell {
    services: Services,
    notifications: Manager,
    user_menu: UserMenu,
    hooks: Hooks,
}

impl Shell {
    pub fn new(services: Services, config: &Config) -> Self {
        let delay = DismissDelay::from_config(config.notifications.dismiss_after_secs);
        Self {
            services,
            notifications: Manager::with_delay(delay),
            user_menu: UserMenu::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
            hooks: Hooks::new(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &Services {
        &self.services
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn user_menu(&self) -> &UserMenu {
        &self.user_menu
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.services.session.current_user()
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        self.services.navigator.current()
    }

    // Toasts

    /// Shows a toast and schedules its removal. Always succeeds.
    pub fn notify(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
    ) -> ToastId {
        self.notify_at(kind, title, message, Instant::now())
    }

    pub fn notify_at(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        now: Instant,
    ) -> ToastId {
        self.notifications.notify(kind, title, message, now)
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Fires every removal that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.notifications.tick(now)
    }

    // User menu

    pub fn toggle_user_menu(&mut self) -> bool {
        self.user_menu.toggle()
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu.close();
    }

    /// Closes the user menu when a pointer press at `target` landed outside it.
    pub fn close_menus_on_outside_click(&mut self, target: Point) -> bool {
        let closed = self.user_menu.close_if_outside(target);
        if closed {
            tracing::trace!(x = target.x, y = target.y, "user menu closed by outside click");
        }
        closed
    }

    /// Keeps the menu region in step with the window size.
    pub fn resize(&mut self, window: Size) {
        self.user_menu.relayout(window);
    }

    // Session

    /// Signs in through the session collaborator.
    ///
    /// On success the user lands on the home page with a success toast; an
    /// invalid username only raises an error toast.
    pub fn sign_in(&mut self, username: &str, plan: Plan, i18n: &I18n) -> Option<User> {
        match self.services.session.login(username, plan) {
            Ok(user) => {
                self.navigate(Route::Home);
                let message = i18n.tr_with_args(
                    "toast-signed-in-message",
                    &[("username", user.username.as_str())],
                );
                self.notify(
                    ToastKind::Success,
                    i18n.tr("toast-signed-in-title"),
                    Some(message),
                );
                Some(user)
            }
            Err(error) => {
                tracing::warn!(%error, "sign-in rejected");
                self.notify(
                    ToastKind::Error,
                    i18n.tr("toast-sign-in-failed-title"),
                    Some(i18n.tr(error.i18n_key())),
                );
                None
            }
        }
    }

    /// Invalidates the session, returns to the root page and posts one info
    /// toast.
    ///
    /// A storage failure while forgetting the session is logged only; the
    /// collaborator has already dropped the in-memory session by then.
    pub fn sign_out(&mut self, i18n: &I18n) -> ToastId {
        if let Err(error) = self.services.session.logout() {
            tracing::warn!(%error, "session storage could not be cleared");
        }
        self.user_menu.close();
        self.services.navigator.navigate_to(Route::Home.path());
        self.notify(
            ToastKind::Info,
            i18n.tr("toast-signed-out-title"),
            Some(i18n.tr("toast-signed-out-message")),
        )
    }

    // Theme

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.services.theme.toggle_theme();
        tracing::debug!(?mode, "theme toggled");
        mode
    }

    // Navigation

    pub fn navigate(&mut self, route: Route) {
        self.user_menu.close();
        self.services.navigator.navigate_to(route.path());
    }

    // Hooks

    /// Binds the callable surface unless a live handle is already bound.
    pub fn install_hooks(&mut self, handle: ShellHandle) -> Installation {
        self.hooks.install(handle)
    }

    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    #[must_use]
    pub fn handle(&self) -> Option<&ShellHandle> {
        self.hooks.handle()
    }

    /// Applies a request that arrived through a [`ShellHandle`].
    pub fn handle_request(&mut self, request: ShellRequest) {
        self.handle_request_at(request, Instant::now());
    }

    pub fn handle_request_at(&mut self, request: ShellRequest, now: Instant) {
        match request {
            ShellRequest::Notify {
                id,
                kind,
                title,
                message,
            } => {
                let toast = Toast::with_id(id, kind, title, now).with_optional_message(message);
                self.notifications.push(toast);
            }
            ShellRequest::Dismiss(id) => {
                self.notifications.dismiss(id);
            }
            ShellRequest::Open(route) => self.navigate(route),
        }
    }
}
