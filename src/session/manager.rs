//! Session handle manager
//!
//! Holds at most one client handle. `login` replaces it, a successful
//! `logout` clears it, and `handle` hands out the current one or an
//! anonymous handle when none is held.
//!
//! Login and logout are serialized on their own lock. The slot lock is
//! only taken to swap the `Arc`, so readers never wait on network calls.

use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{LoginOutcome, MwClient};
use crate::config::WikiConfig;
use crate::error::{SessionError, WikiError, show_api_error};
use crate::host::HostResolver;
use crate::notify::{Notifier, StatusMessage};

/// Shared client handle. Callers may keep a clone after the manager drops it.
pub type SessionHandle = Arc<MwClient>;

pub const LOGIN_STATUS: &str = "Wikitext: Login...";
pub const LOGOUT_STATUS: &str = "Wikitext: Logout...";
pub const MISSING_CREDENTIALS_WARNING: &str = "You have not filled in the user name or password, please go to the settings to edit them and try again.";
pub const NO_SESSION_WARNING: &str = "You are not logged in.";
pub const LOGOUT_SUCCESS: &str = "result: \"Success\"";

/// Manages the session handle slot
pub struct SessionManager {
    config: WikiConfig,
    hosts: Arc<dyn HostResolver>,
    notifier: Arc<dyn Notifier>,
    /// Serializes login and logout; never held by readers
    op_lock: Mutex<()>,
    /// Locked only to read, store or clear the handle
    slot: Mutex<Option<SessionHandle>>,
}

impl SessionManager {
    pub fn new(
        config: WikiConfig,
        hosts: Arc<dyn HostResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            hosts,
            notifier,
            op_lock: Mutex::new(()),
            slot: Mutex::new(None),
        }
    }

    /// The handle currently held, without building one.
    pub async fn current(&self) -> Option<SessionHandle> {
        self.slot.lock().await.clone()
    }

    /// Returns whether a handle is held (logged in, or a failed login attempt).
    pub async fn is_active(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    fn build_handle(&self, host: &str) -> Result<SessionHandle, WikiError> {
        let api_url = self.config.api_url(host);
        debug!("Building wiki client for {}", api_url);
        Ok(Arc::new(MwClient::new(api_url, &self.config)?))
    }

    /// Log in with the configured credentials.
    ///
    /// The new handle is stored before the login request is sent and is
    /// kept even if the request fails.
    pub async fn login(&self) -> Result<LoginOutcome, SessionError> {
        let _op = self.op_lock.lock().await;

        let Some(host) = self.hosts.resolve_host().await else {
            debug!("Login skipped: host unresolved");
            return Err(SessionError::HostUnresolved);
        };

        let Some(credentials) = self.config.credentials() else {
            self.notifier.show_warning(MISSING_CREDENTIALS_WARNING);
            return Err(SessionError::MissingCredentials);
        };

        let handle = match self.build_handle(&host) {
            Ok(handle) => handle,
            Err(e) => {
                show_api_error(self.notifier.as_ref(), "login", &e);
                return Err(e.into());
            }
        };
        *self.slot.lock().await = Some(Arc::clone(&handle));

        let _status = StatusMessage::show(self.notifier.as_ref(), LOGIN_STATUS);
        info!("Logging in to {} as {}", handle.api_url(), credentials.username());

        match handle.login(&credentials).await {
            Ok(outcome) => {
                info!("Logged in as {} (id {})", outcome.username, outcome.user_id);
                self.notifier.show_info(&outcome.summary());
                Ok(outcome)
            }
            Err(e) => {
                show_api_error(self.notifier.as_ref(), "login", &e);
                Err(e.into())
            }
        }
    }

    /// Log out of the held session.
    ///
    /// The handle is cleared only when the wiki accepts the logout; on
    /// failure it stays so the logout can be retried.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _op = self.op_lock.lock().await;

        let Some(handle) = self.current().await else {
            self.notifier.show_warning(NO_SESSION_WARNING);
            return Err(SessionError::NoActiveSession);
        };

        let _status = StatusMessage::show(self.notifier.as_ref(), LOGOUT_STATUS);
        info!("Logging out of {}", handle.api_url());

        let result = match handle.fetch_edit_token().await {
            Ok(token) => handle.logout(&token).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                *self.slot.lock().await = None;
                self.notifier.show_info(LOGOUT_SUCCESS);
                Ok(())
            }
            Err(e) => {
                show_api_error(self.notifier.as_ref(), "logout", &e);
                Err(e.into())
            }
        }
    }

    /// The held handle, or a fresh anonymous one that is not stored.
    ///
    /// Returns `None` when no handle is held and no host resolves.
    pub async fn handle(&self) -> Option<SessionHandle> {
        if let Some(handle) = self.current().await {
            return Some(handle);
        }

        let host = self.hosts.resolve_host().await?;
        match self.build_handle(&host) {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("Failed to build wiki client for {}: {}", host, e);
                None
            }
        }
    }
}
