//! Credential handling
//!
//! Login credentials come from configuration and are only checked for
//! presence; the wiki decides whether they are correct.

use std::fmt;

/// Username and password pair for `action=login`
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

/// Blank or whitespace-only values count as missing.
fn is_present(input: &str) -> bool {
    !input.trim().is_empty()
}

impl Credentials {
    /// Builds credentials when both parts are present.
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (username, password) {
            (Some(user), Some(pass)) if is_present(user) && is_present(pass) => Some(Self {
                username: user.to_string(),
                password: pass.to_string(),
            }),
            _ => None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
