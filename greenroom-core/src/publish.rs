use greenroom_state::NewReleaseDraft;
use greenroom_storage as storage;

use crate::{
    gs,
    session::{ERROR_RESET, SUCCESS_RESET, SubmitStatus},
    uploads::{self, ObjectStore},
};

/// The save-release endpoint, as the publish flow needs it.
///
/// Implemented by [`greenroom_supabase::Client`]; tests substitute recording
/// endpoints.
#[allow(async_fn_in_trait)]
pub trait SaveReleaseEndpoint {
    /// Deliver an assembled release. Anything but success fails the whole
    /// submission.
    async fn save(&self, request: &gs::SaveReleaseRequest) -> gs::ClientResult<()>;
}

impl SaveReleaseEndpoint for gs::Client {
    async fn save(&self, request: &gs::SaveReleaseRequest) -> gs::ClientResult<()> {
        self.save_release(request).await
    }
}

#[derive(Debug)]
/// An error during a new-release submission.
pub enum PublishError {
    /// The form is missing a mandatory asset.
    IncompleteForm,
    /// An asset upload failed.
    Upload(storage::StorageError),
    /// The save endpoint refused the release.
    Endpoint(gs::ClientError),
}
impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishError::IncompleteForm => write!(f, "form is missing mandatory fields"),
            PublishError::Upload(e) => write!(f, "upload failed: {e}"),
            PublishError::Endpoint(e) => write!(f, "save endpoint failed: {e}"),
        }
    }
}
impl std::error::Error for PublishError {}
impl From<storage::StorageError> for PublishError {
    fn from(e: storage::StorageError) -> Self {
        PublishError::Upload(e)
    }
}
impl From<gs::ClientError> for PublishError {
    fn from(e: gs::ClientError) -> Self {
        PublishError::Endpoint(e)
    }
}

/// A new-release upload session: the form draft plus the submit state
/// machine, which behaves exactly like the edit flow's.
pub struct PublishSession {
    artist_id: String,
    webhook_url: String,
    draft: NewReleaseDraft,
    status: SubmitStatus,
}

impl PublishSession {
    /// Open an upload session for an artist. `webhook_url` is forwarded to
    /// the save endpoint, which sends the announcement itself.
    pub fn new(artist_id: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        PublishSession {
            artist_id: artist_id.into(),
            webhook_url: webhook_url.into(),
            draft: NewReleaseDraft::default(),
            status: SubmitStatus::Idle,
        }
    }

    /// The form draft.
    pub fn draft(&self) -> &NewReleaseDraft {
        &self.draft
    }

    /// Mutable access to the form draft.
    pub fn draft_mut(&mut self) -> &mut NewReleaseDraft {
        &mut self.draft
    }

    /// Where the submission currently stands.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Submit the new release.
    ///
    /// An incomplete form is a no-op: nothing is uploaded and no network call
    /// is made. Otherwise the cover and every track's audio upload first
    /// (tracks concurrently), and only a fully-uploaded release is sent to
    /// the save endpoint. Success holds for [`SUCCESS_RESET`] and clears the
    /// form; failure holds for [`ERROR_RESET`] and keeps the form for retry.
    pub async fn submit(
        &mut self,
        store: &impl ObjectStore,
        endpoint: &impl SaveReleaseEndpoint,
        now: chrono::DateTime<chrono::Utc>,
    ) -> SubmitStatus {
        if !self.draft.can_submit() {
            return self.status;
        }
        self.status = SubmitStatus::Submitting;

        match self.deliver(store, endpoint, now).await {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                tokio::time::sleep(SUCCESS_RESET).await;
                self.draft = NewReleaseDraft::default();
                self.status = SubmitStatus::Idle;
                SubmitStatus::Success
            }
            Err(e) => {
                tracing::warn!("release upload failed: {e}");
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
        endpoint: &impl SaveReleaseEndpoint,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), PublishError> {
        let timestamp = now.timestamp_millis();
        let release_id = format!("release-{timestamp}");

        let Some(cover_art) =
            uploads::upload_new_release_assets(store, &release_id, &self.draft, timestamp).await?
        else {
            return Err(PublishError::IncompleteForm);
        };

        let request = gs::SaveReleaseRequest {
            artist_id: self.artist_id.clone(),
            release: gs::ReleasePayload {
                id: release_id,
                title: self.draft.title.clone(),
                release_type: self.draft.release_type.as_str().to_string(),
                release_date: self.draft.release_date.clone(),
                cover_art,
                tracks: self
                    .draft
                    .tracks
                    .iter()
                    .enumerate()
                    .map(|(index, track)| gs::TrackPayload {
                        id: (index + 1).to_string(),
                        title: track.title.clone(),
                        duration: track.duration.clone(),
                        explicit: track.explicit,
                    })
                    .collect(),
            },
            webhook_url: self.webhook_url.clone(),
        };
        endpoint.save(&request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::TimeZone;
    use greenroom_state::PendingAsset;

    struct FakeObjectStore {
        fail: bool,
        puts: Mutex<Vec<String>>,
    }
    impl FakeObjectStore {
        fn new(fail: bool) -> Self {
            FakeObjectStore {
                fail,
                puts: Mutex::new(vec![]),
            }
        }
    }
    impl ObjectStore for FakeObjectStore {
        async fn put(
            &self,
            path: &str,
            _content_type: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, storage::StorageError> {
            if self.fail {
                return Err(storage::StorageError::UploadRejected { status: 500 });
            }
            self.puts.lock().unwrap().push(path.to_string());
            Ok(format!("https://cdn.example/{path}"))
        }
    }

    struct FakeEndpoint {
        fail: bool,
        saved: Mutex<Vec<gs::SaveReleaseRequest>>,
    }
    impl FakeEndpoint {
        fn new(fail: bool) -> Self {
            FakeEndpoint {
                fail,
                saved: Mutex::new(vec![]),
            }
        }
    }
    impl SaveReleaseEndpoint for FakeEndpoint {
        async fn save(&self, request: &gs::SaveReleaseRequest) -> gs::ClientResult<()> {
            if self.fail {
                return Err(gs::ClientError::StoreError {
                    status: 500,
                    message: None,
                });
            }
            self.saved.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn complete_session() -> PublishSession {
        let mut session = PublishSession::new("jamar", "https://example.com/hook");
        let draft = session.draft_mut();
        draft.title = "EP One".to_string();
        draft.release_date = "2026-03-01".to_string();
        draft.set_cover(PendingAsset::new(vec![9], "cover.jpg", "image/jpeg"));
        draft.add_track();
        for (index, track) in draft.tracks.iter_mut().enumerate() {
            track.title = format!("Track {}", index + 1);
            track.duration = "2:00".to_string();
            track.audio = Some(PendingAsset::new(vec![0], "take.mp3", "audio/mpeg"));
        }
        session
    }

    #[tokio::test]
    async fn test_incomplete_form_makes_no_network_call() {
        let mut session = PublishSession::new("jamar", "https://example.com/hook");
        session.draft_mut().title = "EP One".to_string();

        let store = FakeObjectStore::new(false);
        let endpoint = FakeEndpoint::new(false);
        let outcome = session.submit(&store, &endpoint, now()).await;

        assert_eq!(outcome, SubmitStatus::Idle);
        assert!(store.puts.lock().unwrap().is_empty());
        assert!(endpoint.saved.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_form_uploads_then_saves() {
        let mut session = complete_session();
        assert!(session.draft().can_submit());

        let store = FakeObjectStore::new(false);
        let endpoint = FakeEndpoint::new(false);
        let outcome = session.submit(&store, &endpoint, now()).await;
        assert_eq!(outcome, SubmitStatus::Success);

        // One cover and two audio files land before the save call.
        assert_eq!(store.puts.lock().unwrap().len(), 3);

        let saved = endpoint.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let release = &saved[0].release;
        assert!(release.id.starts_with("release-"));
        assert_eq!(release.title, "EP One");
        assert_eq!(release.release_date, "2026-03-01");
        assert!(!release.cover_art.is_empty());
        assert_eq!(release.tracks.len(), 2);
        for (index, track) in release.tracks.iter().enumerate() {
            assert_eq!(track.id, (index + 1).to_string());
            assert!(!track.title.is_empty());
            assert_eq!(track.duration, "2:00");
            assert!(!track.explicit);
        }
        drop(saved);

        // The form resets after the success state clears.
        assert!(!session.draft().can_submit());
        assert_eq!(session.status(), SubmitStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_failure_never_reaches_the_endpoint() {
        let mut session = complete_session();

        let store = FakeObjectStore::new(true);
        let endpoint = FakeEndpoint::new(false);
        let outcome = session.submit(&store, &endpoint, now()).await;

        assert_eq!(outcome, SubmitStatus::Error);
        assert!(endpoint.saved.lock().unwrap().is_empty());
        // The form is preserved for retry.
        assert!(session.draft().can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_endpoint_rejection_is_an_error() {
        let mut session = complete_session();

        let store = FakeObjectStore::new(false);
        let endpoint = FakeEndpoint::new(true);
        let outcome = session.submit(&store, &endpoint, now()).await;

        assert_eq!(outcome, SubmitStatus::Error);
        assert!(session.draft().can_submit());
    }
}
