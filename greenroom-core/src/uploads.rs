use greenroom_state::{Draft, NewReleaseDraft, ReleaseId, UploadedAssets};
use greenroom_storage as storage;

/// Write access to the object store.
///
/// Implemented by [`greenroom_storage::Client`]; tests substitute recording
/// stores.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Upload bytes to a path, returning the public retrieval URL.
    async fn put(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, storage::StorageError>;
}

impl ObjectStore for storage::Client {
    async fn put(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, storage::StorageError> {
        self.upload(path, content_type, bytes).await
    }
}

/// Upload an edit draft's pending assets and collect their URLs.
///
/// Track uploads run concurrently and are joined before returning; the join
/// is all-or-nothing, so a single failure aborts the submission before
/// anything is sent downstream.
pub async fn upload_pending(
    store: &impl ObjectStore,
    release_id: &ReleaseId,
    draft: &Draft,
    timestamp_millis: i64,
) -> Result<UploadedAssets, storage::StorageError> {
    let cover_url = match draft.cover() {
        Some(cover) => Some(
            store
                .put(
                    &storage::cover_path(&release_id.0, timestamp_millis),
                    &cover.content_type,
                    cover.bytes.clone(),
                )
                .await?,
        ),
        None => None,
    };

    let uploads = draft.tracks().iter().filter_map(|edit| {
        let audio = edit.audio.as_ref()?;
        let path = storage::track_audio_path(&release_id.0, &edit.id.0, timestamp_millis);
        Some(async move {
            let url = store.put(&path, &audio.content_type, audio.bytes.clone()).await?;
            Ok::<_, storage::StorageError>((edit.id.clone(), url))
        })
    });
    let track_audio = futures::future::try_join_all(uploads)
        .await?
        .into_iter()
        .collect();

    Ok(UploadedAssets {
        cover_url,
        track_audio,
    })
}

/// Upload a new-release form's cover and per-track audio, returning the
/// cover's public URL. Submitted track IDs are positional, and so are the
/// audio paths.
///
/// Completeness is the caller's guard (`can_submit`); rows without audio are
/// skipped here rather than failing.
pub async fn upload_new_release_assets(
    store: &impl ObjectStore,
    release_id: &str,
    draft: &NewReleaseDraft,
    timestamp_millis: i64,
) -> Result<Option<String>, storage::StorageError> {
    let cover_url = match &draft.cover {
        Some(cover) => Some(
            store
                .put(
                    &storage::cover_path(release_id, timestamp_millis),
                    &cover.content_type,
                    cover.bytes.clone(),
                )
                .await?,
        ),
        None => None,
    };

    let uploads = draft.tracks.iter().enumerate().filter_map(|(index, track)| {
        let audio = track.audio.as_ref()?;
        let path =
            storage::track_audio_path(release_id, &(index + 1).to_string(), timestamp_millis);
        Some(async move {
            store
                .put(&path, &audio.content_type, audio.bytes.clone())
                .await
        })
    });
    futures::future::try_join_all(uploads).await?;

    Ok(cover_url)
}
