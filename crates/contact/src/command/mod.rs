mod submit_form;

use std::sync::Arc;

use crate::{Journal, Notifier, TracingJournal};

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Clone)]
pub struct Command {
    notifier: Option<Arc<dyn Notifier>>,
    journal: Arc<dyn Journal>,
}

impl Command {
    /// Delivery is skipped entirely when `notifier` is `None`.
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self {
            notifier,
            journal: Arc::new(TracingJournal),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn Journal>) -> Self {
        self.journal = journal;
        self
    }

    pub fn delivery_enabled(&self) -> bool {
        self.notifier.is_some()
    }
}
