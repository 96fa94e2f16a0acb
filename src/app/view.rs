// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of layers: the navbar above the current page, the
//! account dropdown when open, then the toast overlay on top.

use super::route::Route;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::services::{SubscriptionInfo, UsageStats, User};
use crate::ui::login;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{overlay, Manager};
use crate::ui::pages::{self, ViewContext as PagesViewContext};
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub user: Option<User>,
    pub usage: Option<&'a UsageStats>,
    pub subscription: Option<&'a SubscriptionInfo>,
    pub login: &'a login::State,
    pub menu_open: bool,
    pub is_dark: bool,
    pub notifications: &'a Manager,
}

/// Renders the navbar, the current page and the overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_ctx = NavbarViewContext {
        i18n: ctx.i18n,
        user: ctx.user.as_ref(),
        usage: ctx.usage,
        route: ctx.route,
        menu_open: ctx.menu_open,
        is_dark: ctx.is_dark,
    };

    let page: Element<'_, Message> = if ctx.route == Route::Login {
        ctx.login.view(ctx.i18n).map(Message::Login)
    } else {
        pages::view(&PagesViewContext {
            i18n: ctx.i18n,
            route: ctx.route,
            user: ctx.user.as_ref(),
            usage: ctx.usage,
            subscription: ctx.subscription,
        })
        .map(Message::Page)
    };

    let base = Column::new()
        .push(navbar::view(&navbar_ctx).map(Message::Navbar))
        .push(
            Container::new(scrollable(page))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(dropdown) = navbar::dropdown(&navbar_ctx) {
        stack = stack.push(dropdown.map(Message::Navbar));
    }

    let colors = if ctx.is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    };
    stack = stack.push(overlay::view_overlay(ctx.notifications, &colors).map(Message::Notification));

    stack.into()
}
