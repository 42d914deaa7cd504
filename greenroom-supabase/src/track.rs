use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// A row in the `tracks` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRow {
    /// The track ID, unique within its release.
    pub id: String,
    /// The ID of the owning release.
    pub release_id: String,
    /// The track title.
    pub title: String,
    /// The displayed duration, `m:ss`. Stored as text, never validated.
    pub duration: String,
    /// Whether the track is flagged as explicit.
    pub explicit: bool,
    /// The row's creation timestamp. Determines track order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Track endpoints.
impl Client {
    /// Get a release's tracks in creation order.
    pub async fn list_tracks(&self, release_id: &str) -> ClientResult<Vec<TrackRow>> {
        self.select(
            "tracks",
            &[
                ("select", "*".to_string()),
                ("release_id", format!("eq.{release_id}")),
                ("order", "created_at.asc".to_string()),
            ],
        )
        .await
    }

    /// Insert a track row. Only the sync job writes to the store.
    pub async fn insert_track(&self, row: &TrackRow) -> ClientResult<()> {
        self.insert("tracks", row).await
    }
}
