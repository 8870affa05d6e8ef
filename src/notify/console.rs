//! Console notifier
//!
//! Prints notifications for the interactive binary and mirrors them to the log.

use log::{debug, error, info, warn};

use super::Notifier;

/// Writes messages to stdout/stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_info(&self, message: &str) {
        info!("{}", message);
        println!("{}", message);
    }

    fn show_warning(&self, message: &str) {
        warn!("{}", message);
        eprintln!("warning: {}", message);
    }

    fn show_error(&self, message: &str) {
        error!("{}", message);
        eprintln!("error: {}", message);
    }

    fn set_status(&self, text: &str) {
        debug!("status set: {}", text);
        println!("{}", text);
    }

    fn clear_status(&self, text: &str) {
        debug!("status cleared: {}", text);
    }
}
