//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging; `RUST_LOG` overrides the default `warn` level.
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
