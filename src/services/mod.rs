// SPDX-License-Identifier: MPL-2.0
//! Collaborators the shell delegates to.
//!
//! The shell never owns authentication, theming, usage accounting or routing
//! itself. It holds one [`Services`] bundle of trait objects so tests and
//! alternative backends can swap any of them.

pub mod navigation;
pub mod session;
pub mod theme;
pub mod usage;

pub use navigation::{Navigator, Router};
pub use session::{FileSession, Plan, SessionService, User};
pub use theme::{ConfigTheme, ThemeService};
pub use usage::{LocalUsage, SubscriptionInfo, SubscriptionStatus, UsageService, UsageStats};

use crate::app::paths;
use crate::app::route::Route;
use crate::config::Config;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct Services {
    pub session: Arc<dyn SessionService>,
    pub theme: Arc<dyn ThemeService>,
    pub usage: Arc<dyn UsageService>,
    pub navigator: Arc<dyn Navigator>,
}

impl Services {
    pub fn new(
        session: Arc<dyn SessionService>,
        theme: Arc<dyn ThemeService>,
        usage: Arc<dyn UsageService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            theme,
            usage,
            navigator,
        }
    }

    /// File-backed services rooted at the resolved data and config directories.
    ///
    /// Returns the bundle plus the i18n key of a warning when the stored
    /// session could not be restored.
    pub fn local(
        config: &Config,
        data_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Option<String>) {
        let (session, warning) =
            FileSession::load(paths::session_file_with_override(data_dir.clone()));
        let theme = ConfigTheme::new(config.general.theme_mode, config_dir);
        let usage = LocalUsage::new(paths::usage_file_with_override(data_dir));

        (
            Self::new(
                Arc::new(session),
                Arc::new(theme),
                Arc::new(usage),
                Arc::new(Router::new(Route::Home)),
            ),
            warning,
        )
    }

    /// Services that keep everything in memory.
    #[must_use]
    pub fn ephemeral(config: &Config) -> Self {
        Self::new(
            Arc::new(FileSession::in_memory()),
            Arc::new(ConfigTheme::ephemeral(config.general.theme_mode)),
            Arc::new(LocalUsage::new(None)),
            Arc::new(Router::default()),
        )
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("authenticated", &self.session.is_authenticated())
            .field("theme", &self.theme.mode())
            .field("route", &self.navigator.current())
            .finish_non_exhaustive()
    }
}
