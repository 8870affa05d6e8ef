//! Error types
//!
//! Defines the errors raised by the wiki API client and by the session manager.

use std::fmt;

/// Errors from talking to the MediaWiki action API
#[derive(Debug)]
pub enum WikiError {
    /// Transport failure: connect, timeout, body decode
    Http(reqwest::Error),
    /// Non-2xx HTTP status
    Status { status: u16, body: String },
    /// `{"error": {"code": ..., "info": ...}}` returned by the API
    Api { code: String, info: String },
    /// `action=login` answered with something other than `Success`
    LoginFailed { result: String, reason: String },
    /// A token query came back without the requested token
    MissingToken(&'static str),
    InvalidResponse(String),
}

impl fmt::Display for WikiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikiError::Http(e) => write!(f, "HTTP error: {}", e),
            WikiError::Status { status, body } => {
                write!(f, "Unexpected HTTP status {}: {}", status, body)
            }
            WikiError::Api { code, info } => write!(f, "API error {}: {}", code, info),
            WikiError::LoginFailed { result, reason } => {
                write!(f, "Login failed ({}): {}", result, reason)
            }
            WikiError::MissingToken(kind) => write!(f, "No {} token in response", kind),
            WikiError::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for WikiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WikiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WikiError {
    fn from(error: reqwest::Error) -> Self {
        WikiError::Http(error)
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(error: serde_json::Error) -> Self {
        WikiError::InvalidResponse(error.to_string())
    }
}

/// Errors returned by session operations.
///
/// Every variant has already been surfaced to the user through the
/// notifier by the time the caller sees it.
#[derive(Debug)]
pub enum SessionError {
    /// No host could be resolved; the operation was skipped silently
    HostUnresolved,
    /// Username or password missing from configuration
    MissingCredentials,
    /// Logout requested without a session handle
    NoActiveSession,
    Api(WikiError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::HostUnresolved => write!(f, "No wiki host could be resolved"),
            SessionError::MissingCredentials => write!(f, "User name or password not configured"),
            SessionError::NoActiveSession => write!(f, "No active session"),
            SessionError::Api(e) => write!(f, "Wiki API error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WikiError> for SessionError {
    fn from(error: WikiError) -> Self {
        SessionError::Api(error)
    }
}
