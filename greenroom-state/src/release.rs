use serde::{Deserialize, Serialize};

use crate::{Track, TrackId, gs};

/// A release ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReleaseId(pub String);
impl std::fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a release is an album or a single.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// A multi-track album.
    Album,
    /// A standalone single.
    Single,
}
impl ReleaseType {
    /// The lowercase wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Album => "album",
            ReleaseType::Single => "single",
        }
    }
}
impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A release, as greenroom cares about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    /// The release ID.
    pub id: ReleaseId,
    /// The release title.
    pub title: String,
    /// Whether this is an album or a single.
    pub release_type: ReleaseType,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// The public URL of the cover art.
    pub cover_art: String,
    /// The tracks, in track-number order.
    pub tracks: Vec<Track>,
}
impl Release {
    /// Assemble a release from its store row and its track rows. Track rows
    /// must already be in creation order.
    pub fn from_rows(row: gs::ReleaseRow, tracks: Vec<gs::TrackRow>) -> Self {
        Release {
            id: ReleaseId(row.id),
            title: row.title,
            release_type: match row.release_type.as_str() {
                "album" => ReleaseType::Album,
                _ => ReleaseType::Single,
            },
            release_date: row.release_date,
            cover_art: row.cover_art_url,
            tracks: tracks.into_iter().map(Track::from).collect(),
        }
    }

    /// Look up a track by ID.
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == *id)
    }
}
