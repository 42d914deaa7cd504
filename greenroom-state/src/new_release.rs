use crate::{PendingAsset, ReleaseType};

/// One track on the new-release form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrack {
    /// A form-local ID. The submitted track IDs are positional, so this only
    /// addresses rows while the form is being filled in.
    pub temp_id: String,
    /// The track title.
    pub title: String,
    /// The displayed duration, `m:ss`.
    pub duration: String,
    /// Whether the track is flagged as explicit.
    pub explicit: bool,
    /// The audio file to upload. Mandatory before submission.
    pub audio: Option<PendingAsset>,
}
impl NewTrack {
    fn empty(temp_id: String) -> Self {
        NewTrack {
            temp_id,
            title: String::new(),
            duration: "0:00".to_string(),
            explicit: false,
            audio: None,
        }
    }
}

/// The new-release form's draft state.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReleaseDraft {
    /// The release title.
    pub title: String,
    /// Whether the release is an album or a single.
    pub release_type: ReleaseType,
    /// The release date as `YYYY-MM-DD`. Empty until picked.
    pub release_date: String,
    /// The cover image to upload. Mandatory before submission.
    pub cover: Option<PendingAsset>,
    /// A local `data:` URL preview of the picked cover.
    pub cover_preview: Option<String>,
    /// The tracks, in submission order. Never empty.
    pub tracks: Vec<NewTrack>,
}

impl Default for NewReleaseDraft {
    /// A fresh form: a single, with one empty track row.
    fn default() -> Self {
        NewReleaseDraft {
            title: String::new(),
            release_type: ReleaseType::Single,
            release_date: String::new(),
            cover: None,
            cover_preview: None,
            tracks: vec![NewTrack::empty("1".to_string())],
        }
    }
}

impl NewReleaseDraft {
    /// Append an empty track row. The new form-local ID is one past the
    /// highest numeric ID currently on the form.
    pub fn add_track(&mut self) {
        let next = self
            .tracks
            .iter()
            .filter_map(|track| track.temp_id.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        self.tracks.push(NewTrack::empty(next.to_string()));
    }

    /// Remove a track row by form-local ID. The last remaining row stays.
    pub fn remove_track(&mut self, temp_id: &str) {
        if self.tracks.len() > 1 {
            self.tracks.retain(|track| track.temp_id != temp_id);
        }
    }

    /// Mutable access to a track row by form-local ID.
    pub fn track_mut(&mut self, temp_id: &str) -> Option<&mut NewTrack> {
        self.tracks.iter_mut().find(|track| track.temp_id == temp_id)
    }

    /// Attach the cover image, recording a local preview.
    pub fn set_cover(&mut self, cover: PendingAsset) {
        self.cover_preview = Some(cover.preview_data_url());
        self.cover = Some(cover);
    }

    /// Whether every mandatory field is present: a non-empty title, a release
    /// date, a cover, and for every track a non-empty title, a duration
    /// string, and an audio file. Submission stays disabled until this holds.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.release_date.is_empty()
            && self.cover.is_some()
            && !self.tracks.is_empty()
            && self.tracks.iter().all(|track| {
                !track.title.trim().is_empty() && !track.duration.is_empty() && track.audio.is_some()
            })
    }
}
