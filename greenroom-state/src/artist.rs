use serde::{Deserialize, Serialize};

use crate::{Release, gs};

/// An artist ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtistId(pub String);
impl std::fmt::Display for ArtistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An artist and their releases.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// The artist ID.
    pub id: ArtistId,
    /// The artist's display name.
    pub name: String,
    /// The shared login secret, compared as plaintext.
    pub password: String,
    /// The artist's external catalog ID. Only the sync job reads this.
    pub catalog_id: Option<String>,
    /// The artist's releases, newest release date first.
    pub releases: Vec<Release>,
}
impl Artist {
    /// Assemble an artist from their store row and assembled releases.
    pub fn from_row(row: gs::ArtistRow, releases: Vec<Release>) -> Self {
        Artist {
            id: ArtistId(row.id),
            name: row.name,
            password: row.password,
            catalog_id: row.tidal_id,
            releases,
        }
    }
}
