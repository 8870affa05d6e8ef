//! Session management
//!
//! Owns the shared wiki client handle and the login/logout lifecycle.

pub mod manager;

pub use manager::{SessionHandle, SessionManager};
