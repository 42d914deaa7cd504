use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// A row in the `artists` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRow {
    /// The artist ID.
    pub id: String,
    /// The artist's display name.
    pub name: String,
    /// The artist's shared login password, stored in plaintext.
    pub password: String,
    /// The artist's external catalog ID, if registered for sync.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidal_id: Option<String>,
}

/// Artist endpoints.
impl Client {
    /// Get all artists.
    pub async fn list_artists(&self) -> ClientResult<Vec<ArtistRow>> {
        self.select("artists", &[("select", "*".to_string())]).await
    }

    /// Get the artists with an external catalog ID registered for sync.
    pub async fn list_artists_with_catalog_id(&self) -> ClientResult<Vec<ArtistRow>> {
        self.select(
            "artists",
            &[
                ("select", "*".to_string()),
                ("tidal_id", "not.is.null".to_string()),
            ],
        )
        .await
    }
}
