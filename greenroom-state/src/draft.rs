use crate::{PendingAsset, Release, TrackId};

/// One track's pending edits.
///
/// `title` and `explicit` always hold the *current* values, which may equal
/// the originals; divergence is decided against the draft's seed release.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEdit {
    /// The ID of the track this edit applies to.
    pub id: TrackId,
    /// The current title.
    pub title: String,
    /// The current explicit flag.
    pub explicit: bool,
    /// A replacement audio file, if one was picked.
    pub audio: Option<PendingAsset>,
}

/// The ephemeral edit buffer for one release.
///
/// Created when edit mode is entered, discarded on cancel, and reset to a
/// clean copy after a successful submission. Every mutator consumes the draft
/// and returns the updated value, so a caller always holds exactly one
/// consistent state and partially-applied edits cannot be observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    original: Release,
    /// The release-title override. Its presence alone marks the draft dirty,
    /// even when the text matches the original title.
    release_title: Option<String>,
    cover: Option<PendingAsset>,
    cover_preview: Option<String>,
    /// One edit record per original track, in original order, keyed by ID.
    tracks: Vec<TrackEdit>,
}

impl Draft {
    /// Create a clean draft seeded from a release.
    pub fn new(release: &Release) -> Self {
        Draft {
            release_title: None,
            cover: None,
            cover_preview: None,
            tracks: release
                .tracks
                .iter()
                .map(|track| TrackEdit {
                    id: track.id.clone(),
                    title: track.title.clone(),
                    explicit: track.explicit,
                    audio: None,
                })
                .collect(),
            original: release.clone(),
        }
    }

    /// The release this draft was seeded from.
    pub fn original(&self) -> &Release {
        &self.original
    }

    /// The current release title: the override if set, the original
    /// otherwise.
    pub fn release_title(&self) -> &str {
        self.release_title
            .as_deref()
            .unwrap_or(&self.original.title)
    }

    /// The release-title override, if one is set.
    pub fn release_title_override(&self) -> Option<&str> {
        self.release_title.as_deref()
    }

    /// The pending replacement cover, if one is attached.
    pub fn cover(&self) -> Option<&PendingAsset> {
        self.cover.as_ref()
    }

    /// A local `data:` URL preview of the attached cover. Present iff a new
    /// cover is attached.
    pub fn cover_preview(&self) -> Option<&str> {
        self.cover_preview.as_deref()
    }

    /// The per-track edit records, one per original track, in original order.
    pub fn tracks(&self) -> &[TrackEdit] {
        &self.tracks
    }

    /// Override the release title.
    pub fn with_release_title(mut self, title: impl Into<String>) -> Self {
        self.release_title = Some(title.into());
        self
    }

    /// Set a track's title. Unknown IDs leave the draft unchanged.
    pub fn with_track_title(mut self, id: &TrackId, title: impl Into<String>) -> Self {
        if let Some(edit) = self.tracks.iter_mut().find(|edit| edit.id == *id) {
            edit.title = title.into();
        }
        self
    }

    /// Set a track's explicit flag. Unknown IDs leave the draft unchanged.
    pub fn with_track_explicit(mut self, id: &TrackId, explicit: bool) -> Self {
        if let Some(edit) = self.tracks.iter_mut().find(|edit| edit.id == *id) {
            edit.explicit = explicit;
        }
        self
    }

    /// Attach a replacement audio file to a track. Unknown IDs leave the
    /// draft unchanged.
    pub fn with_track_audio(mut self, id: &TrackId, audio: PendingAsset) -> Self {
        if let Some(edit) = self.tracks.iter_mut().find(|edit| edit.id == *id) {
            edit.audio = Some(audio);
        }
        self
    }

    /// Attach a replacement cover image, recording a local preview alongside
    /// the pending upload.
    pub fn with_cover(mut self, cover: PendingAsset) -> Self {
        self.cover_preview = Some(cover.preview_data_url());
        self.cover = Some(cover);
        self
    }

    /// Whether any pending change exists.
    ///
    /// Track fields compare by value, so editing a title back to the original
    /// leaves the draft clean. The release-title override counts by presence.
    pub fn is_dirty(&self) -> bool {
        self.release_title.is_some()
            || self.cover.is_some()
            || self.tracks.iter().any(|edit| {
                self.original.track(&edit.id).is_none_or(|orig| {
                    edit.title != orig.title
                        || edit.explicit != orig.explicit
                        || edit.audio.is_some()
                })
            })
    }

    /// Discard every pending edit, returning a clean copy of the original.
    pub fn reset(self) -> Self {
        Draft::new(&self.original)
    }
}
