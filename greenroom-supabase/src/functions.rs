use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult};

/// The machine payload sent to the `save-release` function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReleaseRequest {
    /// The submitting artist's ID.
    pub artist_id: String,
    /// The fully-assembled release.
    pub release: ReleasePayload,
    /// The webhook the function notifies once the release is saved.
    pub webhook_url: String,
}

/// A release as the `save-release` function expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePayload {
    /// The new release's ID.
    pub id: String,
    /// The release title.
    pub title: String,
    /// The release type, `album` or `single`.
    #[serde(rename = "type")]
    pub release_type: String,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// The public URL of the uploaded cover art.
    pub cover_art: String,
    /// The tracks, in submission order.
    pub tracks: Vec<TrackPayload>,
}

/// One track of a [`ReleasePayload`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPayload {
    /// The track's ID within the release.
    pub id: String,
    /// The track title.
    pub title: String,
    /// The displayed duration, `m:ss`.
    pub duration: String,
    /// Whether the track is flagged as explicit.
    pub explicit: bool,
}

/// Function endpoints.
impl Client {
    /// Submit a new release to the `save-release` function. Anything but a
    /// success status means the release was not saved.
    pub async fn save_release(&self, request: &SaveReleaseRequest) -> ClientResult<()> {
        let response = self
            .client
            .post(format!("{}/functions/v1/save-release", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(ClientError::StoreError {
                status: status.as_u16(),
                message: Self::error_message(&bytes),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_release_request_wire_shape() {
        let request = SaveReleaseRequest {
            artist_id: "jamar".to_string(),
            release: ReleasePayload {
                id: "release-1".to_string(),
                title: "EP One".to_string(),
                release_type: "album".to_string(),
                release_date: "2026-03-01".to_string(),
                cover_art: "https://example.com/cover".to_string(),
                tracks: vec![TrackPayload {
                    id: "1".to_string(),
                    title: "Opener".to_string(),
                    duration: "2:00".to_string(),
                    explicit: false,
                }],
            },
            webhook_url: "https://example.com/hook".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["artistId"], "jamar");
        assert_eq!(value["webhookUrl"], "https://example.com/hook");
        assert_eq!(value["release"]["type"], "album");
        assert_eq!(value["release"]["releaseDate"], "2026-03-01");
        assert_eq!(value["release"]["coverArt"], "https://example.com/cover");
        assert_eq!(value["release"]["tracks"][0]["explicit"], false);
    }

    #[test]
    fn test_release_row_column_names() {
        let row: crate::ReleaseRow = serde_json::from_str(
            r#"{
                "id": "sweez-city",
                "artist_id": "yuno-sweez",
                "title": "$weezCity",
                "type": "album",
                "release_date": "2025-12-25",
                "cover_art_url": "https://example.com/art.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(row.release_type, "album");
        assert_eq!(row.release_date, "2025-12-25");
    }
}
