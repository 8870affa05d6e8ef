//! API action and token names used by the session.

/// Values of the `action` parameter sent to `api.php`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Logout,
    Query,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Logout => "logout",
            Action::Query => "query",
        }
    }
}

/// Token types requested through `meta=tokens`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Login,
    /// The edit token required by mutating requests such as logout
    Csrf,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Login => "login",
            TokenType::Csrf => "csrf",
        }
    }

    /// Key under `query.tokens` holding the token
    pub fn response_key(&self) -> &'static str {
        match self {
            TokenType::Login => "logintoken",
            TokenType::Csrf => "csrftoken",
        }
    }
}
