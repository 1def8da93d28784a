use async_trait::async_trait;

use crate::ContactSubmission;

/// Forwards an accepted submission to the site owner.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}
