// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the shell and the pages.
//!
//! The `App` struct wires together the shell, localization and the page
//! states, and translates messages into shell operations or asynchronous
//! account loading. Window policy (default and minimum size) lives here so
//! it is easy to audit user-facing behavior.

mod message;
pub mod paths;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{AccountData, Flags, Message};

use crate::config::{self, defaults};
use crate::i18n::fluent::I18n;
use crate::services::{Services, SubscriptionInfo, UsageStats};
use crate::shell::Shell;
use crate::ui::login;
use crate::ui::notifications::ToastKind;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    shell: Shell,
    login: login::State,
    window_size: Size,
    /// Last cursor position seen; `None` until the pointer moves.
    cursor: Option<Point>,
    usage: Option<UsageStats>,
    subscription: Option<SubscriptionInfo>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.shell.current_route())
            .field("toasts", &self.shell.notifications().len())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            defaults::MIN_WINDOW_WIDTH,
            defaults::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed on the
    // first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and local services, then restores the session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let (services, session_warning) = Services::local(&config, data_dir, config_dir);
        services.theme.init_theme();

        let mut app = Self::with_services(i18n, services, &config);

        // Show warnings for config/session loading issues
        for key in [config_warning, session_warning].into_iter().flatten() {
            let title = app.i18n.tr(&key);
            app.shell.notify(ToastKind::Error, title, None);
        }

        let task = match app.shell.current_user() {
            Some(user) => {
                tracing::info!(username = %user.username, "session restored");
                update::load_account_task(app.shell.services().usage.clone(), user)
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the application around already constructed services.
    pub fn with_services(i18n: I18n, services: Services, config: &config::Config) -> Self {
        let window_size = Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT);
        let mut shell = Shell::new(services, config);
        shell.resize(window_size);

        Self {
            i18n,
            shell,
            login: login::State::default(),
            window_size,
            cursor: None,
            usage: None,
            subscription: None,
        }
    }

    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = self.i18n.tr(self.shell.current_route().title_key());
        format!("{page} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.shell.services().theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let hook_sub = subscription::create_hook_subscription();
        let window_sub = subscription::create_window_subscription();
        let pointer_sub = subscription::create_pointer_subscription(self.shell.user_menu().is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.shell.notifications().has_pending_removals());

        Subscription::batch([hook_sub, window_sub, pointer_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            shell: &mut self.shell,
            login: &mut self.login,
            window_size: &mut self.window_size,
            cursor: &mut self.cursor,
            usage: &mut self.usage,
            subscription: &mut self.subscription,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Notification(msg) => update::handle_notification_message(&mut ctx, msg),
            Message::Login(msg) => update::handle_login_message(&mut ctx, msg),
            Message::Page(msg) => update::handle_page_message(&mut ctx, msg),
            Message::Hook(event) => update::handle_hook_event(&mut ctx, event),
            Message::Tick(now) => {
                ctx.shell.tick(now);
                Task::none()
            }
            Message::PointerMoved(position) => {
                *ctx.cursor = Some(position);
                Task::none()
            }
            Message::PointerPressed => update::handle_pointer_pressed(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::AccountLoaded(user, result) => {
                update::handle_account_loaded(&mut ctx, &user, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let ctx = view::ViewContext {
            i18n: &self.i18n,
            route: self.shell.current_route(),
            user: self.shell.current_user(),
            usage: self.usage.as_ref(),
            subscription: self.subscription.as_ref(),
            login: &self.login,
            menu_open: self.shell.user_menu().is_open(),
            is_dark: self.shell.services().theme.is_dark(),
            notifications: self.shell.notifications(),
        };
        view::view(ctx)
    }
}
