// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Session(SessionError),
}

/// Failures reported by the session collaborator.
/// Used to provide user-friendly, localized toast messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Username is empty, too long, or contains unsupported characters
    InvalidUsername,

    /// An operation that needs a signed-in user was attempted anonymously
    NotAuthenticated,

    /// The session file could not be read or written
    Storage(String),
}

impl SessionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SessionError::InvalidUsername => "error-session-invalid-username",
            SessionError::NotAuthenticated => "error-session-not-authenticated",
            SessionError::Storage(_) => "error-session-storage",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidUsername => write!(f, "Invalid username"),
            SessionError::NotAuthenticated => write!(f, "Not signed in"),
            SessionError::Storage(msg) => write!(f, "Session storage failed: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n key used when this error is surfaced as a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Session(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Error::Session(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
