//! API result types
//!
//! Response shapes for the requests the session issues (`formatversion=2`).

use serde::Deserialize;
use std::collections::HashMap;

/// Body of a top-level `error` member
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokensResponse {
    pub query: TokensQuery,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokensQuery {
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub login: LoginBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    pub result: String,
    #[serde(default)]
    pub lguserid: Option<u64>,
    #[serde(default)]
    pub lgusername: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Plain text or a structured message depending on `errorformat`
    #[serde(default)]
    pub reason: Option<serde_json::Value>,
}

impl LoginBody {
    pub fn reason_text(&self) -> String {
        match &self.reason {
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// Result of a successful `action=login`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: String,
    pub user_id: u64,
    pub result: String,
    /// Token echoed by the server, or the login token the request carried
    pub token: String,
}

impl LoginOutcome {
    /// Message shown to the user after logging in
    pub fn summary(&self) -> String {
        format!(
            "User \"{}\"(UserID:\"{}\") Login Result is \"{}\". Login Token is \"{}\".",
            self.username, self.user_id, self.result, self.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_body_with_structured_reason() {
        let body: LoginResponse = serde_json::from_str(
            r#"{"login":{"result":"Failed","reason":{"code":"wrongpassword","text":"Nope"}}}"#,
        )
        .unwrap();
        assert_eq!(body.login.result, "Failed");
        assert!(body.login.reason_text().contains("wrongpassword"));
        assert!(body.login.lguserid.is_none());
    }

    #[test]
    fn test_summary_contains_all_fields() {
        let outcome = LoginOutcome {
            username: "Alice".into(),
            user_id: 42,
            result: "Success".into(),
            token: "abc+\\".into(),
        };
        assert_eq!(
            outcome.summary(),
            "User \"Alice\"(UserID:\"42\") Login Result is \"Success\". Login Token is \"abc+\\\".",
        );
    }
}
