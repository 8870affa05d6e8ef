//! Authentication inputs
//!
//! Holds the credentials the session manager sends to the wiki.

pub mod credentials;

pub use credentials::Credentials;
