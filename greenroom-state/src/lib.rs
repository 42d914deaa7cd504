//! Representations of greenroom's catalog and edit state.
//!
//! Separated out so the portal, the CLI, and the sync job share one model.
#![deny(missing_docs)]

pub use greenroom_supabase as gs;

mod artist;
pub use artist::{Artist, ArtistId};

mod release;
pub use release::{Release, ReleaseId, ReleaseType};

mod track;
pub use track::{Track, TrackId};

mod asset;
pub use asset::PendingAsset;

mod draft;
pub use draft::{Draft, TrackEdit};

mod new_release;
pub use new_release::{NewReleaseDraft, NewTrack};

mod changeset;
pub use changeset::{ChangeSet, TrackChange, UploadedAssets};

mod fallback;
pub use fallback::fallback_artists;

mod date;
pub use date::format_release_date;
