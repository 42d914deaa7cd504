//! Background catalog sync: pull releases from the external music catalog
//! into the store for every artist registered with a catalog ID.
//!
//! Runs to completion and exits; scheduling is the operator's concern. The
//! interactive portal never invokes this — its only contract with the portal
//! is that it writes rows into the same store schema the portal reads.

mod tidal;

use anyhow::Context as _;

use greenroom_core::config::Config;
use greenroom_supabase as gs;

use tidal::{CatalogAlbum, CatalogClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config = Config::load();
    let store = gs::Client::new(config.store.url.as_str(), config.store.api_key.as_str());
    let catalog = CatalogClient::connect(&config.sync.client_id, &config.sync.client_secret)
        .await
        .context("catalog authentication failed")?;

    let artists = store.list_artists_with_catalog_id().await?;
    if artists.is_empty() {
        tracing::info!("no artists with a catalog ID, nothing to sync");
        return Ok(());
    }

    for artist in artists {
        let Some(catalog_id) = artist.tidal_id.as_deref() else {
            continue;
        };
        if let Err(e) = sync_artist(&store, &catalog, &artist.id, &artist.name, catalog_id).await {
            tracing::warn!("sync failed for {}: {e:#}", artist.name);
        }
    }

    tracing::info!("catalog sync complete");
    Ok(())
}

async fn sync_artist(
    store: &gs::Client,
    catalog: &CatalogClient,
    artist_id: &str,
    artist_name: &str,
    catalog_id: &str,
) -> anyhow::Result<()> {
    let albums = catalog.artist_albums(catalog_id).await?;
    tracing::info!("{artist_name}: {} catalog albums", albums.len());

    for album in albums {
        // Dedup on release title + artist, not catalog ID: hand-entered rows
        // for the same release carry portal-minted IDs.
        if store
            .find_release_by_title(artist_id, &album.title)
            .await?
            .is_some()
        {
            continue;
        }
        insert_release(store, catalog, artist_id, &album).await?;
    }
    Ok(())
}

async fn insert_release(
    store: &gs::Client,
    catalog: &CatalogClient,
    artist_id: &str,
    album: &CatalogAlbum,
) -> anyhow::Result<()> {
    let release_id = format!("tidal-{}", album.id);
    // The catalog's EPs are shelved as albums; everything else as a single.
    let release_type = if album
        .album_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("ep"))
    {
        "album"
    } else {
        "single"
    };

    store
        .insert_release(&gs::ReleaseRow {
            id: release_id.clone(),
            artist_id: artist_id.to_string(),
            title: album.title.clone(),
            release_type: release_type.to_string(),
            release_date: album.release_date.clone(),
            cover_art_url: album.cover.clone(),
        })
        .await?;

    let tracks = match catalog.album_tracks(album.id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::warn!("no tracks fetched for {}: {e}", album.title);
            vec![]
        }
    };
    for track in tracks {
        store
            .insert_track(&gs::TrackRow {
                id: format!("tidal-track-{}", track.id),
                release_id: release_id.clone(),
                title: track.title,
                duration: format_duration(track.duration),
                explicit: track.explicit,
                created_at: None,
            })
            .await?;
    }
    Ok(())
}

/// Convert a catalog duration in seconds to the portal's `m:ss` display form.
fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(169), "2:49");
        assert_eq!(format_duration(754), "12:34");
    }
}
