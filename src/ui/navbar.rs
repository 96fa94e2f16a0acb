// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the brand, links to the main pages, the theme toggle and
//! the account trigger. The trigger and the dropdown are drawn at the fixed
//! sizes [`MenuRegion`](crate::ui::user_menu::MenuRegion) assumes, so
//! outside-click detection matches what is on screen.

use crate::app::route::Route;
use crate::i18n::fluent::I18n;
use crate::services::{User, UsageStats};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Color, Element, Length, Padding, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: Option<&'a User>,
    pub usage: Option<&'a UsageStats>,
    pub route: Route,
    pub menu_open: bool,
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleTheme,
    ToggleUserMenu,
    CloseUserMenu,
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
    ToggleTheme,
    ToggleUserMenu,
    CloseUserMenu,
    SignOut,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(route) => Event::Navigate(route),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::ToggleUserMenu => Event::ToggleUserMenu,
        Message::CloseUserMenu => Event::CloseUserMenu,
        Message::SignOut => Event::SignOut,
    }
}

/// Links shown in the bar, in order.
const LINKS: [Route; 3] = [Route::Search, Route::CryptoChecker, Route::Pricing];

/// Render the navigation bar.
pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("app-name"))
            .size(typography::TITLE_MD)
            .color(palette::PRIMARY_500),
    )
    .on_press(Message::Navigate(Route::Home))
    .padding(spacing::XXS)
    .style(link_style(false));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand);

    for route in LINKS {
        let link = button(Text::new(ctx.i18n.tr(route.title_key())).size(typography::BODY))
            .on_press(Message::Navigate(route))
            .padding([spacing::XXS, spacing::XS])
            .style(link_style(ctx.route == route));
        row = row.push(link);
    }

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("navbar-theme-light")
    } else {
        ctx.i18n.tr("navbar-theme-dark")
    };
    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(link_style(false));

    row = row
        .push(Space::new().width(Length::Fill))
        .push(theme_button)
        .push(build_trigger(ctx));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(Vertical::Center)
        .style(bar_style)
        .into()
}

/// Account trigger, or the sign-in button when nobody is signed in.
fn build_trigger<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let (label, message) = match ctx.user {
        Some(user) => (user.username.clone(), Message::ToggleUserMenu),
        None => (ctx.i18n.tr("navbar-sign-in"), Message::Navigate(Route::Login)),
    };

    button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::USER_MENU_TRIGGER_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::SM])
    .style(trigger_style(ctx.menu_open))
    .into()
}

/// Renders the account dropdown as a full-window layer, or `None` when it
/// is closed or nobody is signed in.
pub fn dropdown<'a>(ctx: &ViewContext<'_>) -> Option<Element<'a, Message>> {
    let user = ctx.user.filter(|_| ctx.menu_open)?;

    let plan_color = if user.plan.is_paid() {
        palette::PREMIUM_500
    } else {
        palette::GRAY_400
    };

    let mut header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(user.username.clone()).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr(user.plan.label_key()))
                .size(typography::CAPTION)
                .color(plan_color),
        );
    if let Some(usage) = ctx.usage {
        let remaining = usage.lookups_remaining().to_string();
        header = header.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("menu-lookups-remaining", &[("count", remaining.as_str())]),
            )
            .size(typography::CAPTION),
        );
    }

    let items = Column::new()
        .push(build_menu_item(
            ctx.i18n.tr("menu-account"),
            Message::Navigate(Route::Account),
        ))
        .push(build_menu_item(
            ctx.i18n.tr("menu-pricing"),
            Message::Navigate(Route::Pricing),
        ))
        .push(build_menu_item(ctx.i18n.tr("menu-sign-out"), Message::SignOut));

    let menu = Container::new(
        Column::new()
            .push(
                Container::new(header)
                    .height(Length::Fixed(sizing::USER_MENU_HEADER_HEIGHT))
                    .padding([spacing::XXS, spacing::XS]),
            )
            .push(items),
    )
    .width(Length::Fixed(sizing::USER_MENU_WIDTH))
    .padding(spacing::XS)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: theme.extended_palette().background.strong.color,
        },
        ..Default::default()
    });

    Some(
        Container::new(menu)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .padding(Padding {
                top: sizing::NAVBAR_HEIGHT,
                right: spacing::SM,
                bottom: 0.0,
                left: 0.0,
            })
            .into(),
    )
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::USER_MENU_ITEM_HEIGHT))
        .style(menu_item_style)
        .into()
}

fn bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

fn link_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let text_color = if selected {
            palette.primary.base.color
        } else {
            palette.background.base.text
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.background.weak.color.into())
            }
            button::Status::Active | button::Status::Disabled => None,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn trigger_style(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let background = if open || matches!(status, button::Status::Hovered) {
            palette.background.strong.color
        } else {
            palette.background.weak.color
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::FULL.into(),
                width: border::WIDTH_SM,
                color: if open {
                    palette.primary.base.color
                } else {
                    Color::TRANSPARENT
                },
            },
            ..Default::default()
        }
    }
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::services::Plan;
    use crate::services::usage::PlanLimits;
    use chrono::NaiveDate;

    fn user() -> User {
        User {
            username: "alice".into(),
            plan: Plan::Premium,
        }
    }

    #[test]
    fn navbar_view_renders_signed_out() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            user: None,
            usage: None,
            route: Route::Home,
            menu_open: false,
            is_dark: false,
        };
        let _element = view(&ctx);
        assert!(dropdown(&ctx).is_none());
    }

    #[test]
    fn dropdown_renders_only_when_open_and_signed_in() {
        let i18n = I18n::default();
        let user = user();
        let usage = UsageStats {
            day: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            lookups_used: 3,
            generations_used: 0,
            limits: PlanLimits::for_plan(Plan::Premium),
        };

        let mut ctx = ViewContext {
            i18n: &i18n,
            user: Some(&user),
            usage: Some(&usage),
            route: Route::Account,
            menu_open: false,
            is_dark: true,
        };
        let _element = view(&ctx);
        assert!(dropdown(&ctx).is_none());

        ctx.menu_open = true;
        assert!(dropdown(&ctx).is_some());
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(
            update(Message::Navigate(Route::Pricing)),
            Event::Navigate(Route::Pricing)
        );
        assert_eq!(update(Message::ToggleTheme), Event::ToggleTheme);
        assert_eq!(update(Message::ToggleUserMenu), Event::ToggleUserMenu);
        assert_eq!(update(Message::CloseUserMenu), Event::CloseUserMenu);
        assert_eq!(update(Message::SignOut), Event::SignOut);
    }
}
