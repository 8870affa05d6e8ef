//! User notifications
//!
//! The session manager reports to the user through a [`Notifier`]; the
//! host application decides how messages and status text are displayed.

pub mod console;
pub mod status;

pub use console::ConsoleNotifier;
pub use status::StatusMessage;

/// Sink for user-visible messages and transient status text
pub trait Notifier: Send + Sync {
    fn show_info(&self, message: &str);

    fn show_warning(&self, message: &str);

    fn show_error(&self, message: &str);

    /// Show transient status text until [`Notifier::clear_status`] is called
    /// with the same text.
    fn set_status(&self, text: &str);

    fn clear_status(&self, text: &str);
}
