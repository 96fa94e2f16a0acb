// SPDX-License-Identifier: MPL-2.0
//! Navigation collaborator.

use crate::app::route::Route;
use std::sync::{PoisonError, RwLock};

pub trait Navigator: Send + Sync {
    /// Requests navigation to `path`.
    fn navigate_to(&self, path: &str);

    /// Route currently displayed.
    fn current(&self) -> Route;
}

/// In-process router tracking the displayed [`Route`].
#[derive(Debug, Default)]
pub struct Router {
    current: RwLock<Route>,
}

impl Router {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }
}

impl Navigator for Router {
    /// Unknown paths fall back to the root route.
    fn navigate_to(&self, path: &str) {
        let route = Route::from_path(path).unwrap_or_else(|| {
            tracing::warn!(path, "unknown route, falling back to home");
            Route::Home
        });
        tracing::debug!(path = route.path(), "navigating");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = route;
    }

    fn current(&self) -> Route {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(Router::default().current(), Route::Home);
    }

    #[test]
    fn navigates_to_known_paths() {
        let router = Router::default();
        router.navigate_to("/pricing");
        assert_eq!(router.current(), Route::Pricing);

        router.navigate_to("/");
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn unknown_path_goes_home() {
        let router = Router::new(Route::Account);
        router.navigate_to("/nowhere");
        assert_eq!(router.current(), Route::Home);
    }
}
