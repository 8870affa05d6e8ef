pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod notify;
pub mod session;
pub mod utils;

pub use session::{SessionHandle, SessionManager};
