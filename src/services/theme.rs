// SPDX-License-Identifier: MPL-2.0
//! Theming collaborator.
//!
//! [`ConfigTheme`] keeps the current [`ThemeMode`] and writes every change
//! back to the `[general]` section of `settings.toml`. The OS preference
//! behind `System` mode is detected once and reused for every frame.

use crate::config;
use crate::ui::theming::{self, ThemeMode};
use iced::Theme;
use std::path::PathBuf;
use std::sync::{OnceLock, PoisonError, RwLock};

pub trait ThemeService: Send + Sync {
    /// Resolves the mode to start with.
    fn init_theme(&self) -> ThemeMode;

    /// Switches between light and dark and returns the new mode.
    fn toggle_theme(&self) -> ThemeMode;

    fn mode(&self) -> ThemeMode;

    fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// The iced theme rendered for the current mode.
    fn iced_theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Where theme changes are written.
#[derive(Debug, Clone)]
enum Persistence {
    /// Config directory resolved by `app::paths` (optionally overridden).
    Config(Option<PathBuf>),
    Disabled,
}

#[derive(Debug)]
pub struct ConfigTheme {
    mode: RwLock<ThemeMode>,
    system_dark: OnceLock<bool>,
    persistence: Persistence,
}

impl ConfigTheme {
    /// Theme backed by `settings.toml` in `config_dir` (or the resolved
    /// default directory when `None`).
    #[must_use]
    pub fn new(initial: ThemeMode, config_dir: Option<PathBuf>) -> Self {
        Self {
            mode: RwLock::new(initial),
            system_dark: OnceLock::new(),
            persistence: Persistence::Config(config_dir),
        }
    }

    /// Theme that never touches the filesystem.
    #[must_use]
    pub fn ephemeral(initial: ThemeMode) -> Self {
        Self {
            mode: RwLock::new(initial),
            system_dark: OnceLock::new(),
            persistence: Persistence::Disabled,
        }
    }

    #[cfg(test)]
    fn with_system_preference(initial: ThemeMode, system_dark: bool) -> Self {
        Self {
            mode: RwLock::new(initial),
            system_dark: OnceLock::from(system_dark),
            persistence: Persistence::Disabled,
        }
    }

    fn system_dark(&self) -> bool {
        *self.system_dark.get_or_init(theming::system_prefers_dark)
    }

    fn persist(&self, mode: ThemeMode) {
        let Persistence::Config(dir) = &self.persistence else {
            return;
        };

        let (mut cfg, _) = config::load_with_override(dir.clone());
        cfg.general.theme_mode = mode;
        if let Err(error) = config::save_with_override(&cfg, dir.clone()) {
            tracing::warn!(%error, "failed to persist theme mode");
        }
    }
}

impl ThemeService for ConfigTheme {
    fn init_theme(&self) -> ThemeMode {
        let mode = self.mode();
        let system_dark = self.system_dark();
        tracing::debug!(?mode, system_dark, "theme initialized");
        mode
    }

    fn toggle_theme(&self) -> ThemeMode {
        let next = {
            let mut mode = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            *mode = mode.toggled_from(self.system_dark());
            *mode
        };
        self.persist(next);
        next
    }

    fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_dark(&self) -> bool {
        self.mode().resolve_dark(self.system_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        let theme = ConfigTheme::ephemeral(ThemeMode::Light);
        assert!(!theme.is_dark());

        assert_eq!(theme.toggle_theme(), ThemeMode::Dark);
        assert!(theme.is_dark());

        assert_eq!(theme.toggle_theme(), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn init_theme_reports_initial_mode() {
        let theme = ConfigTheme::ephemeral(ThemeMode::Dark);
        assert_eq!(theme.init_theme(), ThemeMode::Dark);
    }

    #[test]
    fn system_mode_uses_the_preference_seen_at_init() {
        let theme = ConfigTheme::with_system_preference(ThemeMode::System, false);
        assert_eq!(theme.init_theme(), ThemeMode::System);
        assert!(!theme.is_dark());
        assert_eq!(theme.iced_theme(), Theme::Light);

        assert_eq!(theme.toggle_theme(), ThemeMode::Dark);
        assert_eq!(theme.iced_theme(), Theme::Dark);
    }

    #[test]
    fn system_detection_runs_once() {
        let theme = ConfigTheme::ephemeral(ThemeMode::System);
        theme.init_theme();
        let first = theme.is_dark();
        assert_eq!(theme.system_dark.get(), Some(&first));
        for _ in 0..3 {
            assert_eq!(theme.is_dark(), first);
        }
    }

    #[test]
    fn toggle_is_written_to_settings() {
        let dir = tempdir().expect("temp dir");
        let theme = ConfigTheme::new(ThemeMode::Dark, Some(dir.path().to_path_buf()));

        theme.toggle_theme();

        let (cfg, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(cfg.general.theme_mode, ThemeMode::Light);
    }
}
