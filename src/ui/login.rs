// SPDX-License-Identifier: MPL-2.0
//! Sign-in form.

use crate::i18n::fluent::I18n;
use crate::services::Plan;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, radio, text_input, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    username: String,
    plan: Plan,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PlanSelected(Plan),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submit { username: String, plan: Plan },
}

impl State {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn plan(&self) -> Plan {
        self.plan
    }

    /// Clears the form after a successful sign-in.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UsernameChanged(value) => {
                self.username = value;
                Event::None
            }
            Message::PlanSelected(plan) => {
                self.plan = plan;
                Event::None
            }
            Message::Submit => Event::Submit {
                username: self.username.clone(),
                plan: self.plan,
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

        let username = text_input(&i18n.tr("login-username-placeholder"), &self.username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY);

        let plans = Plan::ALL.into_iter().fold(
            Row::new().spacing(spacing::MD),
            |row, plan| {
                row.push(
                    radio(
                        i18n.tr(plan.label_key()),
                        plan,
                        Some(self.plan),
                        Message::PlanSelected,
                    )
                    .size(typography::BODY),
                )
            },
        );

        let submit = button(
            Container::new(Text::new(i18n.tr("login-submit")))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(Message::Submit)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::LOGIN_FORM_WIDTH))
            .push(title)
            .push(username)
            .push(Text::new(i18n.tr("login-plan-label")).size(typography::CAPTION))
            .push(plans)
            .push(submit);

        Container::new(form)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .into()
    }
}
