use serde::{Deserialize, Serialize};

use crate::gs;

/// A track ID, unique within its release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub String);
impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track, as greenroom cares about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// The track ID.
    pub id: TrackId,
    /// The track title.
    pub title: String,
    /// The displayed duration, `m:ss`. Kept as text and never validated.
    pub duration: String,
    /// Whether the track is flagged as explicit. Display-only.
    pub explicit: bool,
}
impl From<gs::TrackRow> for Track {
    fn from(row: gs::TrackRow) -> Self {
        Track {
            id: TrackId(row.id),
            title: row.title,
            duration: row.duration,
            explicit: row.explicit,
        }
    }
}
