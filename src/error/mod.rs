//! Error handling
//!
//! Defines error types and the user-facing error formatter.

pub mod handlers;
pub mod types;

pub use handlers::{format_api_error, show_api_error};
pub use types::*;
