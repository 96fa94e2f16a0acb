// SPDX-License-Identifier: MPL-2.0
//! Session collaborator: who is signed in, and on which plan.
//!
//! The shell only ever talks to [`SessionService`]. [`FileSession`] is the
//! local implementation: it keeps the signed-in user in memory and mirrors
//! it to `session.toml` in the data directory so a restart keeps the user
//! signed in.

use crate::error::{Error, Result, SessionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Longest accepted username.
pub const MAX_USERNAME_LEN: usize = 32;

/// Account tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Premium,
    Api,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Premium, Plan::Api];

    /// i18n key of the plan badge.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Plan::Free => "plan-free",
            Plan::Premium => "plan-premium",
            Plan::Api => "plan-api",
        }
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        !matches!(self, Plan::Free)
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Plan::Free => "free",
            Plan::Premium => "premium",
            Plan::Api => "api",
        };
        f.write_str(name)
    }
}

/// The signed-in account as the shell sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub plan: Plan,
}

impl User {
    /// Builds a user after validating the username.
    pub fn new(username: &str, plan: Plan) -> Result<Self> {
        let username = validate_username(username)?;
        Ok(Self { username, plan })
    }
}

/// Trims and checks a username: 1 to 32 ASCII letters, digits, `_`, `-` or `.`.
pub fn validate_username(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_USERNAME_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(trimmed.to_string())
    } else {
        Err(SessionError::InvalidUsername.into())
    }
}

/// Authentication collaborator consumed by the shell.
pub trait SessionService: Send + Sync {
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn current_user(&self) -> Option<User>;

    fn login(&self, username: &str, plan: Plan) -> Result<User>;

    /// Invalidates the session.
    ///
    /// Implementations must drop the in-memory session even when persisting
    /// the change fails; the error only reports the persistence failure.
    fn logout(&self) -> Result<()>;
}

/// Session kept in memory and mirrored to a TOML file.
#[derive(Debug)]
pub struct FileSession {
    path: Option<PathBuf>,
    user: RwLock<Option<User>>,
}

impl FileSession {
    /// A session that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            user: RwLock::new(None),
        }
    }

    /// Restores the session from `path` if the file exists.
    ///
    /// Returns the session plus the i18n key of a warning when the file was
    /// present but unreadable; the session then starts signed out.
    pub fn load(path: Option<PathBuf>) -> (Self, Option<String>) {
        let mut warning = None;
        let user = match path.as_deref() {
            Some(p) if p.exists() => match read_session(p) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!(path = %p.display(), %error, "discarding unreadable session");
                    warning = Some("notification-session-load-error".to_string());
                    None
                }
            },
            _ => None,
        };

        (
            Self {
                path,
                user: RwLock::new(user),
            },
            warning,
        )
    }

    fn persist(&self, user: &User) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let content = toml::to_string_pretty(user).map_err(Error::from)?;
        fs::write(path, content).map_err(storage_error)?;
        Ok(())
    }

    fn forget(&self) -> Result<()> {
        match &self.path {
            Some(path) if path.exists() => fs::remove_file(path).map_err(storage_error),
            _ => Ok(()),
        }
    }
}

impl SessionService for FileSession {
    fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn login(&self, username: &str, plan: Plan) -> Result<User> {
        let user = User::new(username, plan)?;
        self.persist(&user)?;
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        tracing::info!(username = %user.username, plan = %user.plan, "signed in");
        Ok(user)
    }

    fn logout(&self) -> Result<()> {
        let previous = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            tracing::info!(username = %user.username, "signed out");
        }
        self.forget()
    }
}

fn read_session(path: &Path) -> Result<User> {
    let content = fs::read_to_string(path)?;
    let user: User = toml::from_str(&content)?;
    // Re-validate: the file is user-editable.
    User::new(&user.username, user.plan)
}

fn storage_error(err: std::io::Error) -> Error {
    SessionError::Storage(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn username_validation() {
        assert_eq!(validate_username("  alice ").unwrap(), "alice");
        assert!(validate_username("bob_42.x-y").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LEN + 1)).is_err());
    }

    #[test]
    fn invalid_username_maps_to_session_error() {
        let session = FileSession::in_memory();
        let err = session.login("", Plan::Free).unwrap_err();
        assert_eq!(err, Error::Session(SessionError::InvalidUsername));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_then_logout_in_memory() {
        let session = FileSession::in_memory();
        let user = session.login("alice", Plan::Premium).expect("login");
        assert_eq!(session.current_user(), Some(user));
        assert!(session.is_authenticated());

        session.logout().expect("logout");
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn session_survives_reload() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("session.toml");

        let (session, warning) = FileSession::load(Some(path.clone()));
        assert!(warning.is_none());
        session.login("carol", Plan::Api).expect("login");

        let (restored, warning) = FileSession::load(Some(path.clone()));
        assert!(warning.is_none());
        assert_eq!(
            restored.current_user(),
            Some(User {
                username: "carol".into(),
                plan: Plan::Api
            })
        );

        restored.logout().expect("logout");
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_session_file_starts_signed_out_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("session.toml");
        fs::write(&path, "username = ").expect("write");

        let (session, warning) = FileSession::load(Some(path));
        assert!(!session.is_authenticated());
        assert_eq!(warning.as_deref(), Some("notification-session-load-error"));
    }

    #[test]
    fn logout_when_signed_out_is_ok() {
        let session = FileSession::in_memory();
        assert!(session.logout().is_ok());
    }

    #[test]
    fn plan_defaults_to_free_when_missing() {
        let user: User = toml::from_str("username = \"dave\"").expect("parse");
        assert_eq!(user.plan, Plan::Free);
        assert!(!Plan::Free.is_paid());
        assert!(Plan::Premium.is_paid());
    }
}
