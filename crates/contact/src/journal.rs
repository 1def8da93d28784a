use crate::ContactRecord;

/// Where acknowledged submissions are written, whatever happened to delivery.
pub trait Journal: Send + Sync {
    fn record(&self, record: &ContactRecord) -> anyhow::Result<()>;
}

/// Writes one INFO event per submission to the process log.
///
/// The submission travels as a single `record` field holding the JSON
/// object `{name, email, subject, message, timestamp}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJournal;

impl Journal for TracingJournal {
    fn record(&self, record: &ContactRecord) -> anyhow::Result<()> {
        let record = serde_json::to_string(record)?;

        tracing::info!(record = %record, "Contact form submission");

        Ok(())
    }
}
