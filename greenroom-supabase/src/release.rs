use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// A row in the `releases` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRow {
    /// The release ID.
    pub id: String,
    /// The ID of the owning artist.
    pub artist_id: String,
    /// The release title.
    pub title: String,
    /// The release type, `album` or `single`.
    #[serde(rename = "type")]
    pub release_type: String,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// The public URL of the cover art.
    pub cover_art_url: String,
}

/// Release endpoints.
impl Client {
    /// Get all releases belonging to an artist.
    pub async fn list_releases(&self, artist_id: &str) -> ClientResult<Vec<ReleaseRow>> {
        self.select(
            "releases",
            &[
                ("select", "*".to_string()),
                ("artist_id", format!("eq.{artist_id}")),
            ],
        )
        .await
    }

    /// Look up an artist's release by title. The sync job's dedup check.
    pub async fn find_release_by_title(
        &self,
        artist_id: &str,
        title: &str,
    ) -> ClientResult<Option<ReleaseRow>> {
        Ok(self
            .select::<ReleaseRow>(
                "releases",
                &[
                    ("select", "*".to_string()),
                    ("artist_id", format!("eq.{artist_id}")),
                    ("title", format!("eq.{title}")),
                ],
            )
            .await?
            .into_iter()
            .next())
    }

    /// Insert a release row. Only the sync job writes to the store; the
    /// portal itself is read-only.
    pub async fn insert_release(&self, row: &ReleaseRow) -> ClientResult<()> {
        self.insert("releases", row).await
    }
}
