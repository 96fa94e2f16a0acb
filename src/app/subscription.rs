// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Each subscription exists only while it has something to do: the tick only
//! while toast removals are pending, the press listener only while the user
//! menu is open. Dropping a subscription from `App::subscription` is what
//! deregisters it.

use super::Message;
use crate::config::defaults::DISMISS_TICK_MILLIS;
use crate::shell::hooks;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Window resizes and cursor movement, always active.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        _ => None,
    })
}

/// Global pointer-press listener for outside-click detection.
///
/// Presses are reported whether or not a widget captured them, since a click
/// on a page button is still a click outside the menu.
pub fn create_pointer_subscription(menu_open: bool) -> Subscription<Message> {
    if menu_open {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::PointerPressed)
            }
            _ => None,
        })
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_pending_removals: bool) -> Subscription<Message> {
    if has_pending_removals {
        time::every(Duration::from_millis(DISMISS_TICK_MILLIS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Worker owning the shell handle channel.
///
/// Iced keeps a single instance of this subscription alive for as long as
/// it is returned, so the handle is created once per application run.
pub fn create_hook_subscription() -> Subscription<Message> {
    Subscription::run(hooks::worker).map(Message::Hook)
}
