// SPDX-License-Identifier: MPL-2.0
//! Routes the user can navigate between.

/// Screens of the application, each reachable by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Search,
    CryptoChecker,
    Pricing,
    Login,
    Account,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Search,
        Route::CryptoChecker,
        Route::Pricing,
        Route::Login,
        Route::Account,
    ];

    /// Path of this route; the application root is `/`.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Search => "/search",
            Route::CryptoChecker => "/crypto-checker",
            Route::Pricing => "/pricing",
            Route::Login => "/login",
            Route::Account => "/account",
        }
    }

    /// Resolves a path, ignoring a trailing slash. Unknown paths yield `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// i18n key of the navbar/page title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Home => "route-home",
            Route::Search => "route-search",
            Route::CryptoChecker => "route-crypto-checker",
            Route::Pricing => "route-pricing",
            Route::Login => "route-login",
            Route::Account => "route-account",
        }
    }

    /// Whether the page is only useful to a signed-in user.
    #[must_use]
    pub fn requires_account(self) -> bool {
        matches!(self, Route::Account | Route::CryptoChecker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_from_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/pricing/"), Some(Route::Pricing));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_path_is_none() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn root_is_home() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::default(), Route::Home);
    }
}
