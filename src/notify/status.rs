//! Transient status indicator

use super::Notifier;

/// Status text that stays visible while the guard is alive.
///
/// Dropping the guard clears the status, so every exit path of the
/// enclosing scope clears it exactly once.
pub struct StatusMessage<'a> {
    notifier: &'a dyn Notifier,
    text: &'static str,
}

impl<'a> StatusMessage<'a> {
    pub fn show(notifier: &'a dyn Notifier, text: &'static str) -> Self {
        notifier.set_status(text);
        Self { notifier, text }
    }
}

impl Drop for StatusMessage<'_> {
    fn drop(&mut self) {
        self.notifier.clear_status(self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Calls(Mutex<Vec<String>>);

    impl Notifier for Calls {
        fn show_info(&self, _: &str) {}
        fn show_warning(&self, _: &str) {}
        fn show_error(&self, _: &str) {}
        fn set_status(&self, text: &str) {
            self.0.lock().unwrap().push(format!("set {text}"));
        }
        fn clear_status(&self, text: &str) {
            self.0.lock().unwrap().push(format!("clear {text}"));
        }
    }

    fn early_return(notifier: &dyn Notifier, bail: bool) -> Result<(), ()> {
        let _status = StatusMessage::show(notifier, "Wikitext: Test...");
        if bail {
            return Err(());
        }
        Ok(())
    }

    #[test]
    fn test_cleared_once_on_every_path() {
        for bail in [false, true] {
            let calls = Calls::default();
            let _ = early_return(&calls, bail);
            assert_eq!(
                *calls.0.lock().unwrap(),
                vec!["set Wikitext: Test...", "clear Wikitext: Test..."]
            );
        }
    }
}
