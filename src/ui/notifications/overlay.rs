// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts are small cards with a kind-colored accent border and a dismiss
//! button, stacked in the bottom-right corner of the window.

use super::manager::{Manager, Message};
use super::toast::Toast;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast.
pub fn view<'a>(toast: &'a Toast, colors: &ColorScheme) -> Element<'a, Message> {
    let accent_color = toast.kind().accent(colors);
    let surface = colors.surface;

    let glyph = Container::new(
        Text::new(toast.kind().glyph())
            .size(typography::TITLE_SM)
            .color(accent_color),
    )
    .padding(spacing::XXS);

    let mut body = Column::new().spacing(spacing::XXS).push(
        Text::new(toast.title())
            .size(typography::TITLE_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );

    if let Some(message) = toast.message() {
        body = body.push(
            Text::new(message)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    let dismiss_button = button(Text::new("×").size(typography::TITLE_SM))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [glyph] [title/message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, surface, accent_color))
        .into()
}

/// Renders every active toast, oldest on top, anchored bottom-right.
pub fn view_overlay<'a>(manager: &'a Manager, colors: &ColorScheme) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> =
        manager.active().map(|toast| view(toast, colors)).collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_container_style(theme: &Theme, surface: Color, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(surface)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}
