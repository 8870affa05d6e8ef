//! HTTP client bound to a single `api.php` endpoint.
//!
//! The underlying reqwest client keeps a cookie store, so a login made
//! through one `MwClient` authenticates every later request on it.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::api::action::{Action, TokenType};
use crate::api::results::{ApiErrorBody, LoginOutcome, LoginResponse, TokensResponse};
use crate::auth::Credentials;
use crate::config::WikiConfig;
use crate::error::WikiError;

const LOGIN_SUCCESS: &str = "Success";

/// Longest error body kept in [`WikiError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Cut an error body to [`MAX_ERROR_BODY_CHARS`] characters.
fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

/// A client handle for one wiki. Anonymous until [`MwClient::login`] succeeds.
#[derive(Debug)]
pub struct MwClient {
    http: Client,
    api_url: String,
    edit_token: Mutex<Option<String>>,
}

impl MwClient {
    /// Build a handle for `api_url` using timeout and user agent from `config`.
    pub fn new(api_url: String, config: &WikiConfig) -> Result<Self, WikiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            api_url,
            edit_token: Mutex::new(None),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Edit token from the last successful [`MwClient::fetch_edit_token`].
    pub async fn edit_token(&self) -> Option<String> {
        self.edit_token.lock().await.clone()
    }

    /// POST an action with form parameters and decode the JSON reply.
    ///
    /// A top-level `error` member is returned as [`WikiError::Api`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        action: Action,
        params: &[(&str, &str)],
    ) -> Result<T, WikiError> {
        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 3);
        form.push(("action", action.as_str()));
        form.push(("format", "json"));
        form.push(("formatversion", "2"));
        form.extend_from_slice(params);

        debug!("POST {} action={}", self.api_url, action.as_str());

        let response = self.http.post(&self.api_url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let value: serde_json::Value = response.json().await?;
        if let Some(error) = value.get("error") {
            let body: ApiErrorBody = serde_json::from_value(error.clone())?;
            return Err(WikiError::Api {
                code: body.code,
                info: body.info,
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Query a single token of the given type.
    pub async fn fetch_token(&self, kind: TokenType) -> Result<String, WikiError> {
        let response: TokensResponse = self
            .request(Action::Query, &[("meta", "tokens"), ("type", kind.as_str())])
            .await?;

        response
            .query
            .tokens
            .get(kind.response_key())
            .cloned()
            .ok_or(WikiError::MissingToken(kind.as_str()))
    }

    /// Fetch a csrf token and remember it as this handle's edit token.
    pub async fn fetch_edit_token(&self) -> Result<String, WikiError> {
        let token = self.fetch_token(TokenType::Csrf).await?;
        *self.edit_token.lock().await = Some(token.clone());
        Ok(token)
    }

    /// Log in with a login token obtained on this handle.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, WikiError> {
        let login_token = self.fetch_token(TokenType::Login).await?;

        let response: LoginResponse = self
            .request(
                Action::Login,
                &[
                    ("lgname", credentials.username()),
                    ("lgpassword", credentials.password()),
                    ("lgtoken", login_token.as_str()),
                ],
            )
            .await?;

        let body = response.login;
        if body.result != LOGIN_SUCCESS {
            let reason = body.reason_text();
            return Err(WikiError::LoginFailed {
                result: body.result,
                reason,
            });
        }

        let Some(user_id) = body.lguserid else {
            return Err(WikiError::InvalidResponse(
                "login succeeded without lguserid".into(),
            ));
        };

        Ok(LoginOutcome {
            username: body
                .lgusername
                .unwrap_or_else(|| credentials.username().to_string()),
            user_id,
            result: body.result,
            token: body.token.unwrap_or(login_token),
        })
    }

    /// Send `action=logout` carrying `token`. The API answers `{}` on success.
    pub async fn logout(&self, token: &str) -> Result<(), WikiError> {
        let _: serde_json::Value = self.request(Action::Logout, &[("token", token)]).await?;
        *self.edit_token.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_bodies_kept_whole() {
        assert_eq!(truncate_body("boom"), "boom");
        assert_eq!(truncate_body(""), "");
    }

    #[test]
    fn test_long_bodies_cut_on_char_boundary() {
        let page = "é".repeat(500);
        let cut = truncate_body(&page);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY_CHARS + 3);
        assert!(cut.ends_with("..."));

        let exact = "a".repeat(MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body(&exact), exact);
    }
}
