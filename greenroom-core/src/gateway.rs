use greenroom_state::{Artist, Release, fallback_artists};

use crate::gs;

/// Read access to the remote tabular store, as the gateway needs it.
///
/// Implemented by [`greenroom_supabase::Client`]; tests substitute in-memory
/// stores so the workflow runs in isolation.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    /// Fetch every artist row.
    async fn fetch_artists(&self) -> gs::ClientResult<Vec<gs::ArtistRow>>;
    /// Fetch an artist's release rows.
    async fn fetch_releases(&self, artist_id: &str) -> gs::ClientResult<Vec<gs::ReleaseRow>>;
    /// Fetch a release's track rows, in creation order.
    async fn fetch_tracks(&self, release_id: &str) -> gs::ClientResult<Vec<gs::TrackRow>>;
}

impl CatalogStore for gs::Client {
    async fn fetch_artists(&self) -> gs::ClientResult<Vec<gs::ArtistRow>> {
        self.list_artists().await
    }

    async fn fetch_releases(&self, artist_id: &str) -> gs::ClientResult<Vec<gs::ReleaseRow>> {
        self.list_releases(artist_id).await
    }

    async fn fetch_tracks(&self, release_id: &str) -> gs::ClientResult<Vec<gs::TrackRow>> {
        self.list_tracks(release_id).await
    }
}

/// Load every artist, with releases and tracks assembled.
///
/// Any stage failure falls back to the bundled dataset; callers never see an
/// error, only possibly-stale data. A store with zero artists falls back too.
pub async fn load_all(store: &impl CatalogStore) -> Vec<Artist> {
    match try_load_all(store).await {
        Ok(artists) if !artists.is_empty() => artists,
        Ok(_) => {
            tracing::warn!("store returned no artists, using the bundled dataset");
            fallback_artists()
        }
        Err(e) => {
            tracing::warn!("store fetch failed, using the bundled dataset: {e}");
            fallback_artists()
        }
    }
}

async fn try_load_all(store: &impl CatalogStore) -> gs::ClientResult<Vec<Artist>> {
    let mut artists = vec![];
    for artist_row in store.fetch_artists().await? {
        let mut releases = vec![];
        for release_row in store.fetch_releases(&artist_row.id).await? {
            let tracks = store.fetch_tracks(&release_row.id).await?;
            releases.push(Release::from_rows(release_row, tracks));
        }
        // Newest first. Dates are ISO strings, so plain ordering works.
        releases.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        artists.push(Artist::from_row(artist_row, releases));
    }
    Ok(artists)
}

#[cfg(test)]
mod tests {
    use super::*;

    enum FailAt {
        Artists,
        Releases,
        Tracks,
        Never,
    }

    struct FakeStore {
        fail_at: FailAt,
        artists: Vec<gs::ArtistRow>,
        releases: Vec<gs::ReleaseRow>,
        tracks: Vec<gs::TrackRow>,
    }

    fn store_error() -> gs::ClientError {
        gs::ClientError::StoreError {
            status: 503,
            message: None,
        }
    }

    impl CatalogStore for FakeStore {
        async fn fetch_artists(&self) -> gs::ClientResult<Vec<gs::ArtistRow>> {
            if matches!(self.fail_at, FailAt::Artists) {
                return Err(store_error());
            }
            Ok(self.artists.clone())
        }

        async fn fetch_releases(&self, artist_id: &str) -> gs::ClientResult<Vec<gs::ReleaseRow>> {
            if matches!(self.fail_at, FailAt::Releases) {
                return Err(store_error());
            }
            Ok(self
                .releases
                .iter()
                .filter(|r| r.artist_id == artist_id)
                .cloned()
                .collect())
        }

        async fn fetch_tracks(&self, release_id: &str) -> gs::ClientResult<Vec<gs::TrackRow>> {
            if matches!(self.fail_at, FailAt::Tracks) {
                return Err(store_error());
            }
            Ok(self
                .tracks
                .iter()
                .filter(|t| t.release_id == release_id)
                .cloned()
                .collect())
        }
    }

    fn populated_store(fail_at: FailAt) -> FakeStore {
        FakeStore {
            fail_at,
            artists: vec![gs::ArtistRow {
                id: "jamar".to_string(),
                name: "J@M@R".to_string(),
                password: "jamar123".to_string(),
                tidal_id: None,
            }],
            releases: vec![
                gs::ReleaseRow {
                    id: "older".to_string(),
                    artist_id: "jamar".to_string(),
                    title: "Older".to_string(),
                    release_type: "single".to_string(),
                    release_date: "2025-10-30".to_string(),
                    cover_art_url: "https://example.com/older.jpg".to_string(),
                },
                gs::ReleaseRow {
                    id: "newer".to_string(),
                    artist_id: "jamar".to_string(),
                    title: "Newer".to_string(),
                    release_type: "album".to_string(),
                    release_date: "2026-01-19".to_string(),
                    cover_art_url: "https://example.com/newer.jpg".to_string(),
                },
            ],
            tracks: vec![gs::TrackRow {
                id: "1".to_string(),
                release_id: "newer".to_string(),
                title: "Opener".to_string(),
                duration: "2:03".to_string(),
                explicit: true,
                created_at: Some("2026-01-19T00:00:00Z".to_string()),
            }],
        }
    }

    #[tokio::test]
    async fn test_assembles_releases_newest_first() {
        let artists = load_all(&populated_store(FailAt::Never)).await;
        assert_eq!(artists.len(), 1);

        let releases = &artists[0].releases;
        assert_eq!(releases[0].id.0, "newer");
        assert_eq!(releases[1].id.0, "older");
        assert_eq!(releases[0].tracks.len(), 1);
        assert_eq!(releases[0].tracks[0].title, "Opener");
    }

    #[tokio::test]
    async fn test_fallback_when_artist_fetch_fails() {
        let artists = load_all(&populated_store(FailAt::Artists)).await;
        assert_eq!(artists, fallback_artists());
    }

    #[tokio::test]
    async fn test_fallback_when_release_fetch_fails() {
        let artists = load_all(&populated_store(FailAt::Releases)).await;
        assert_eq!(artists, fallback_artists());
    }

    #[tokio::test]
    async fn test_fallback_when_track_fetch_fails() {
        let artists = load_all(&populated_store(FailAt::Tracks)).await;
        assert_eq!(artists, fallback_artists());
    }

    #[tokio::test]
    async fn test_fallback_when_store_is_empty() {
        let store = FakeStore {
            fail_at: FailAt::Never,
            artists: vec![],
            releases: vec![],
            tracks: vec![],
        };
        let artists = load_all(&store).await;
        assert_eq!(artists, fallback_artists());
    }
}
