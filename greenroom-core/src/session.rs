use std::time::Duration;

use greenroom_state::{ChangeSet, Draft, Release};
use greenroom_storage as storage;

use crate::{
    notify::{self, Webhook, WebhookError},
    uploads::{self, ObjectStore},
};

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing in flight.
    Idle,
    /// Assets uploading or the notification being delivered.
    Submitting,
    /// Delivered; the draft resets shortly.
    Success,
    /// Something failed; the draft is kept so the user can retry.
    Error,
}

/// How long the success state is held before the draft resets.
pub const SUCCESS_RESET: Duration = Duration::from_secs(2);
/// How long the error state is held before returning to idle.
pub const ERROR_RESET: Duration = Duration::from_secs(3);

#[derive(Debug)]
/// An error during an edit-request submission. The user-visible state does
/// not distinguish the stages; this exists for the log line.
pub enum SubmitError {
    /// An asset upload failed.
    Upload(storage::StorageError),
    /// The webhook delivery failed.
    Webhook(WebhookError),
}
impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Upload(e) => write!(f, "upload failed: {e}"),
            SubmitError::Webhook(e) => write!(f, "webhook delivery failed: {e}"),
        }
    }
}
impl std::error::Error for SubmitError {}
impl From<storage::StorageError> for SubmitError {
    fn from(e: storage::StorageError) -> Self {
        SubmitError::Upload(e)
    }
}
impl From<WebhookError> for SubmitError {
    fn from(e: WebhookError) -> Self {
        SubmitError::Webhook(e)
    }
}

/// An edit session for one release: the draft plus the submit state machine.
///
/// One session per logged-in view of a release; sessions never share state,
/// and the store applies no reconciliation between them (last submission
/// wins).
pub struct EditSession {
    artist_name: String,
    draft: Draft,
    status: SubmitStatus,
}

impl EditSession {
    /// Open an edit session, seeding a clean draft from the release.
    pub fn new(artist_name: impl Into<String>, release: &Release) -> Self {
        EditSession {
            artist_name: artist_name.into(),
            draft: Draft::new(release),
            status: SubmitStatus::Idle,
        }
    }

    /// The current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Where the submission currently stands.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Apply an edit, replacing the draft with the updated value.
    pub fn edit(&mut self, f: impl FnOnce(Draft) -> Draft) {
        self.draft = f(self.draft.clone());
    }

    /// Discard every pending edit.
    pub fn cancel(&mut self) {
        self.draft = self.draft.clone().reset();
        self.status = SubmitStatus::Idle;
    }

    /// Submit the pending changes as an edit request.
    ///
    /// A clean draft is a no-op. Uploads complete first; the notification is
    /// only sent once every upload has landed, so a partial change-set is
    /// never visible downstream. On success the success state is held for
    /// [`SUCCESS_RESET`] and the draft resets to a clean copy; on failure the
    /// error state is held for [`ERROR_RESET`] and the draft is preserved for
    /// retry. There is no way to cancel once this starts.
    pub async fn submit(
        &mut self,
        store: &impl ObjectStore,
        webhook: &impl Webhook,
        now: chrono::DateTime<chrono::Utc>,
    ) -> SubmitStatus {
        if !self.draft.is_dirty() {
            return self.status;
        }
        self.status = SubmitStatus::Submitting;

        match self.deliver(store, webhook, now).await {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                tokio::time::sleep(SUCCESS_RESET).await;
                self.draft = self.draft.clone().reset();
                self.status = SubmitStatus::Idle;
                SubmitStatus::Success
            }
            Err(e) => {
                tracing::warn!("edit request submission failed: {e}");
                self.status = SubmitStatus::Error;
                tokio::time::sleep(ERROR_RESET).await;
                self.status = SubmitStatus::Idle;
                SubmitStatus::Error
            }
        }
    }

    async fn deliver(
        &self,
        store: &impl ObjectStore,
        webhook: &impl Webhook,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), SubmitError> {
        let original = self.draft.original();
        let uploaded =
            uploads::upload_pending(store, &original.id, &self.draft, now.timestamp_millis())
                .await?;
        let changes = ChangeSet::build(original, &self.draft, &uploaded);
        let payload = notify::edit_request_payload(&self.artist_name, original, &changes, now);
        webhook.send(&payload).await?;
        Ok(())
    }
}
