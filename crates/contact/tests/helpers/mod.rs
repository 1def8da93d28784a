use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use portfolio_contact::{Command, ContactRecord, ContactSubmission, Journal, Notifier};

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactSubmission>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingNotifier {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("provider unavailable")
    }
}

#[derive(Default)]
pub struct MemoryJournal {
    pub records: Mutex<Vec<ContactRecord>>,
}

impl Journal for MemoryJournal {
    fn record(&self, record: &ContactRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct BrokenJournal;

impl Journal for BrokenJournal {
    fn record(&self, _record: &ContactRecord) -> anyhow::Result<()> {
        anyhow::bail!("log sink closed")
    }
}

#[allow(dead_code)]
pub fn command_with(
    notifier: Option<Arc<dyn Notifier>>,
) -> (Command, Arc<MemoryJournal>) {
    let journal = Arc::new(MemoryJournal::default());
    let command = Command::new(notifier).with_journal(journal.clone());

    (command, journal)
}
