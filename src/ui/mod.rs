// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: views
//! render from borrowed context and emit messages the application turns into
//! shell operations.
//!
//! # Views
//!
//! - [`navbar`] - Top bar with links, theme toggle and the account trigger
//! - [`login`] - Sign-in form
//! - [`pages`] - Content pages behind the navbar
//!
//! # Shared Infrastructure
//!
//! - [`user_menu`] - Account dropdown state and its hit-test region
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod theming;
pub mod user_menu;
