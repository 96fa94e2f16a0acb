// SPDX-License-Identifier: MPL-2.0
//! `binsearch_shell` is the application shell of BIN Search Pro, built with
//! the Iced GUI framework.
//!
//! It owns the toast notifications, the account menu, sign-out and the theme
//! toggle, and exposes a [`shell::ShellHandle`] through which pages reach
//! those services.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod shell;
pub mod ui;
