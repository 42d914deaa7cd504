//! Object path construction for release assets.

/// The path a release's replacement cover image is uploaded to.
pub fn cover_path(release_id: &str, timestamp_millis: i64) -> String {
    format!("releases/{release_id}/cover-{timestamp_millis}")
}

/// The path a track's replacement audio file is uploaded to.
pub fn track_audio_path(release_id: &str, track_id: &str, timestamp_millis: i64) -> String {
    format!("releases/{release_id}/tracks/{track_id}-{timestamp_millis}.mp3")
}
