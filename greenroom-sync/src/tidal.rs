//! A barebones client for the external music catalog's open API.

use serde::Deserialize;

#[derive(Debug)]
/// An error that can occur when talking to the catalog.
pub enum CatalogError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// The catalog responded with a non-success status.
    ApiError {
        /// The HTTP status code.
        status: u16,
    },
}
impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            CatalogError::ApiError { status } => write!(f, "Catalog error: {status}"),
        }
    }
}
impl std::error::Error for CatalogError {}
impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::ReqwestError(e)
    }
}
/// A result type for the client.
pub type CatalogResult<T> = Result<T, CatalogError>;

const AUTH_URL: &str = "https://auth.tidalapi.com/v1/oauth2/token";
const API_BASE: &str = "https://openapi.tidal.com";

/// An album as the catalog reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAlbum {
    /// The catalog's numeric album ID.
    pub id: u64,
    /// The album title.
    pub title: String,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// The cover image URL.
    pub cover: String,
    /// The catalog's release-type label, e.g. `ALBUM`, `EP`, `SINGLE`.
    #[serde(rename = "type")]
    pub album_type: Option<String>,
}

/// A track as the catalog reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTrack {
    /// The catalog's numeric track ID.
    pub id: u64,
    /// The track title.
    pub title: String,
    /// The duration in seconds.
    pub duration: u64,
    /// Whether the track is flagged as explicit.
    #[serde(default)]
    pub explicit: bool,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// A client for the catalog API, authenticated with the client-credentials
/// grant.
pub struct CatalogClient {
    access_token: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Exchange client credentials for an access token.
    pub async fn connect(client_id: &str, client_secret: &str) -> CatalogResult<Self> {
        let client = reqwest::Client::new();
        let response = client
            .post(AUTH_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError {
                status: response.status().as_u16(),
            });
        }
        let token: TokenResponse = response.json().await?;
        Ok(CatalogClient {
            access_token: token.access_token,
            client,
        })
    }

    /// List an artist's catalog albums.
    pub async fn artist_albums(&self, catalog_artist_id: &str) -> CatalogResult<Vec<CatalogAlbum>> {
        self.get(&format!(
            "{API_BASE}/artists/{catalog_artist_id}/albums?countryCode=US&limit=50"
        ))
        .await
    }

    /// List an album's tracks.
    pub async fn album_tracks(&self, album_id: u64) -> CatalogResult<Vec<CatalogTrack>> {
        self.get(&format!(
            "{API_BASE}/albums/{album_id}/tracks?countryCode=US"
        ))
        .await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> CatalogResult<Vec<T>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json::<Page<T>>().await?.data)
    }
}
