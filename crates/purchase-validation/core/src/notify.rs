//! User notification capability

use std::cell::RefCell;

/// Shows a message to the user. In the browser this is a blocking alert.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Keeps every message instead of showing it; used for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
