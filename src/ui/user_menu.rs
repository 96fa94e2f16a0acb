// SPDX-License-Identifier: MPL-2.0
//! Account dropdown state and its interactive region.
//!
//! The navbar renders the trigger and the dropdown at fixed sizes taken from
//! [`sizing`], so the region they occupy can be computed from the window size
//! alone. Pointer presses are compared against that region to decide whether
//! a click happened outside the menu.

use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size};

/// Entries below the dropdown header: account, pricing, sign out.
pub const ITEM_COUNT: usize = 3;

/// Something that can tell whether a point lies inside it.
pub trait Region {
    fn contains(&self, point: Point) -> bool;
}

impl Region for Rectangle {
    fn contains(&self, point: Point) -> bool {
        Rectangle::contains(self, point)
    }
}

/// Screen area owned by the user menu: the navbar trigger plus the dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuRegion {
    trigger: Rectangle,
    dropdown: Rectangle,
}

impl MenuRegion {
    /// Region of the menu as laid out by the navbar in a window of `window`
    /// size, with `item_count` entries below the header.
    #[must_use]
    pub fn layout(window: Size, item_count: usize) -> Self {
        let right_edge = (window.width - spacing::SM).max(0.0);

        // The trigger button is vertically centered in the bar.
        let trigger = Rectangle {
            x: (right_edge - sizing::USER_MENU_TRIGGER_WIDTH).max(0.0),
            y: (sizing::NAVBAR_HEIGHT - sizing::BUTTON_HEIGHT) / 2.0,
            width: sizing::USER_MENU_TRIGGER_WIDTH,
            height: sizing::BUTTON_HEIGHT,
        };

        let dropdown_height = sizing::USER_MENU_HEADER_HEIGHT
            + item_count as f32 * sizing::USER_MENU_ITEM_HEIGHT
            + 2.0 * spacing::XS;
        let dropdown = Rectangle {
            x: (right_edge - sizing::USER_MENU_WIDTH).max(0.0),
            y: sizing::NAVBAR_HEIGHT,
            width: sizing::USER_MENU_WIDTH,
            height: dropdown_height,
        };

        Self { trigger, dropdown }
    }

    #[must_use]
    pub fn trigger(&self) -> Rectangle {
        self.trigger
    }

    #[must_use]
    pub fn dropdown(&self) -> Rectangle {
        self.dropdown
    }
}

impl Region for MenuRegion {
    fn contains(&self, point: Point) -> bool {
        self.trigger.contains(point) || self.dropdown.contains(point)
    }
}

/// Visibility flag of the account dropdown.
#[derive(Debug, Clone)]
pub struct UserMenu {
    open: bool,
    region: MenuRegion,
}

impl UserMenu {
    #[must_use]
    pub fn new(window: Size) -> Self {
        Self {
            open: false,
            region: MenuRegion::layout(window, ITEM_COUNT),
        }
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn region(&self) -> &MenuRegion {
        &self.region
    }

    /// Recomputes the region after a window resize.
    pub fn relayout(&mut self, window: Size) {
        self.region = MenuRegion::layout(window, ITEM_COUNT);
    }

    /// Closes the menu when `point` lies outside its region.
    ///
    /// Returns `true` if the menu was open and got closed.
    pub fn close_if_outside(&mut self, point: Point) -> bool {
        if self.open && !self.region.contains(point) {
            self.open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size::new(1024.0, 720.0);

    #[test]
    fn toggle_twice_restores_flag() {
        let mut menu = UserMenu::new(WINDOW);
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn layout_anchors_to_top_right() {
        let region = MenuRegion::layout(WINDOW, ITEM_COUNT);
        let trigger = region.trigger();
        let dropdown = region.dropdown();

        assert_eq!(trigger.x + trigger.width, WINDOW.width - spacing::SM);
        assert_eq!(trigger.height, sizing::BUTTON_HEIGHT);
        assert_eq!(
            trigger.y + trigger.height / 2.0,
            sizing::NAVBAR_HEIGHT / 2.0
        );
        assert_eq!(dropdown.y, sizing::NAVBAR_HEIGHT);
        assert_eq!(dropdown.x + dropdown.width, WINDOW.width - spacing::SM);
    }

    #[test]
    fn click_inside_keeps_menu_open() {
        let mut menu = UserMenu::new(WINDOW);
        menu.toggle();

        let dropdown = menu.region().dropdown();
        assert!(!menu.close_if_outside(dropdown.center()));
        assert!(menu.is_open());

        let trigger = menu.region().trigger();
        assert!(!menu.close_if_outside(trigger.center()));
        assert!(menu.is_open());
    }

    #[test]
    fn click_outside_closes_menu() {
        let mut menu = UserMenu::new(WINDOW);
        menu.toggle();

        assert!(menu.close_if_outside(Point::new(10.0, 400.0)));
        assert!(!menu.is_open());
    }

    #[test]
    fn click_outside_when_closed_is_noop() {
        let mut menu = UserMenu::new(WINDOW);
        assert!(!menu.close_if_outside(Point::new(10.0, 10.0)));
        assert!(!menu.is_open());
    }

    #[test]
    fn relayout_follows_window_size() {
        let mut menu = UserMenu::new(WINDOW);
        menu.toggle();
        menu.relayout(Size::new(800.0, 600.0));

        // Right edge of the old layout is now outside the window.
        assert!(menu.close_if_outside(Point::new(1000.0, 20.0)));
    }

    #[test]
    fn navbar_padding_around_trigger_counts_as_outside() {
        let region = MenuRegion::layout(WINDOW, ITEM_COUNT);
        let x = region.trigger().center().x;

        assert!(region.contains(Point::new(x, sizing::NAVBAR_HEIGHT / 2.0)));
        assert!(!region.contains(Point::new(x, 2.0)));

        let mut menu = UserMenu::new(WINDOW);
        menu.toggle();
        assert!(menu.close_if_outside(Point::new(x, 2.0)));
    }
}
