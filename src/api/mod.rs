//! MediaWiki action API client
//!
//! Only the requests a login session needs: token queries, login and logout.

pub mod action;
pub mod client;
pub mod results;

pub use action::{Action, TokenType};
pub use client::MwClient;
pub use results::LoginOutcome;
