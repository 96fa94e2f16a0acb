// SPDX-License-Identifier: MPL-2.0
//! Content pages behind the navbar.
//!
//! These pages are thin. They exist to exercise the shell's callable surface:
//! anything they need from the shell (a toast, opening another view) goes
//! through the injected [`ShellHandle`].

use crate::app::route::Route;
use crate::i18n::fluent::I18n;
use crate::services::{SubscriptionInfo, UsageStats, User};
use crate::shell::ShellHandle;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::ToastKind;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub user: Option<&'a User>,
    pub usage: Option<&'a UsageStats>,
    pub subscription: Option<&'a SubscriptionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenCryptoChecker,
    OpenLogin,
    RunLookup,
    Upgrade,
}

/// Applies a page action through the shell handle.
///
/// Without a handle (hooks not installed yet) the action is dropped.
pub fn update(message: Message, handle: Option<&ShellHandle>, user: Option<&User>, i18n: &I18n) {
    let Some(handle) = handle else {
        tracing::debug!(?message, "shell hooks not ready, page action dropped");
        return;
    };

    match message {
        Message::OpenCryptoChecker => {
            if user.is_some() {
                handle.open_crypto_checker();
            } else {
                require_sign_in(handle, i18n);
            }
        }
        Message::OpenLogin => handle.open_login(),
        Message::RunLookup => {
            handle.notify(
                ToastKind::Info,
                i18n.tr("search-unavailable-title"),
                Some(i18n.tr("search-unavailable-message")),
            );
        }
        Message::Upgrade => {
            if user.is_some() {
                handle.notify(
                    ToastKind::Info,
                    i18n.tr("pricing-upgrade-title"),
                    Some(i18n.tr("pricing-upgrade-message")),
                );
            } else {
                require_sign_in(handle, i18n);
            }
        }
    }
}

fn require_sign_in(handle: &ShellHandle, i18n: &I18n) {
    handle.notify(
        ToastKind::Info,
        i18n.tr("toast-sign-in-required-title"),
        Some(i18n.tr("toast-sign-in-required-message")),
    );
    handle.open_login();
}

/// Render the page for `ctx.route`. The login route is rendered elsewhere.
pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(Text::new(i18n.tr(ctx.route.title_key())).size(typography::TITLE_LG));

    column = match ctx.route {
        Route::Home => column
            .push(paragraph(i18n.tr("home-tagline")))
            .push(action(i18n.tr("home-open-crypto-checker"), Message::OpenCryptoChecker)),
        Route::Search => column
            .push(paragraph(i18n.tr("search-description")))
            .push(action(i18n.tr("search-run"), Message::RunLookup)),
        Route::CryptoChecker => match ctx.user {
            Some(_) => column.push(paragraph(i18n.tr("crypto-checker-description"))),
            None => sign_in_prompt(column, i18n),
        },
        Route::Pricing => column
            .push(paragraph(i18n.tr("pricing-free")))
            .push(paragraph(i18n.tr("pricing-premium")))
            .push(paragraph(i18n.tr("pricing-api")))
            .push(action(i18n.tr("pricing-upgrade"), Message::Upgrade)),
        Route::Account => match ctx.user {
            Some(user) => account_details(column, ctx, user),
            None => sign_in_prompt(column, i18n),
        },
        Route::Login => column,
    };

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

fn account_details<'a>(
    mut column: Column<'a, Message>,
    ctx: &ViewContext<'_>,
    user: &User,
) -> Column<'a, Message> {
    let i18n = ctx.i18n;
    column = column
        .push(paragraph(
            i18n.tr_with_args("account-username", &[("username", user.username.as_str())]),
        ))
        .push(paragraph(i18n.tr_with_args(
            "account-plan",
            &[("plan", i18n.tr(user.plan.label_key()).as_str())],
        )));

    match ctx.usage {
        Some(usage) => {
            let lookups = [
                ("used", usage.lookups_used.to_string()),
                ("limit", usage.limits.lookups.to_string()),
            ];
            let generations = [
                ("used", usage.generations_used.to_string()),
                ("limit", usage.limits.generations.to_string()),
            ];
            column = column
                .push(paragraph(tr_owned(i18n, "account-lookups", &lookups)))
                .push(paragraph(tr_owned(i18n, "account-generations", &generations)));
        }
        None => column = column.push(paragraph(i18n.tr("account-usage-loading"))),
    }

    if let Some(subscription) = ctx.subscription {
        let status = i18n.tr(subscription.status.label_key());
        column = column.push(paragraph(i18n.tr_with_args(
            "account-subscription",
            &[("status", status.as_str())],
        )));
        if let Some(date) = subscription.renews_on {
            let date = date.format("%Y-%m-%d").to_string();
            column = column.push(paragraph(
                i18n.tr_with_args("account-renews-on", &[("date", date.as_str())]),
            ));
        }
    }

    column
}

fn tr_owned(i18n: &I18n, key: &str, args: &[(&str, String)]) -> String {
    let borrowed: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.tr_with_args(key, &borrowed)
}

fn sign_in_prompt<'a>(column: Column<'a, Message>, i18n: &I18n) -> Column<'a, Message> {
    column
        .push(Text::new(i18n.tr("page-sign-in-required")).color(palette::GRAY_400))
        .push(action(i18n.tr("navbar-sign-in"), Message::OpenLogin))
}

fn paragraph<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::BODY)
}

fn action<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}
