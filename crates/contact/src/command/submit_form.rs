use crate::{ContactInput, ContactRecord, ContactSubmission};

impl super::Command {
    /// Validates, forwards (best effort) and journals one submission.
    ///
    /// Only validation failures and journal failures reach the caller; a
    /// notifier error is logged and dropped.
    pub async fn submit_form(
        &self,
        input: ContactInput,
    ) -> portfolio_shared::Result<ContactRecord> {
        let submission = ContactSubmission::try_from(input)?;

        if let Some(notifier) = self.notifier.as_ref() {
            if let Err(err) = notifier.notify(&submission).await {
                tracing::error!(
                    err = %err,
                    reply_to = %submission.email,
                    "Email sending error"
                );
            }
        }

        let record = ContactRecord::now(submission)?;
        self.journal.record(&record)?;

        Ok(record)
    }
}
