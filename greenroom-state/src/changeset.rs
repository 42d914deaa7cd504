use std::collections::HashMap;

use crate::{Draft, Release, TrackId};

/// The asset URLs produced by a completed upload pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedAssets {
    /// The new cover's public URL, if a cover was uploaded.
    pub cover_url: Option<String>,
    /// Public audio URLs by track ID, for tracks whose audio was replaced.
    pub track_audio: HashMap<TrackId, String>,
}

/// One track's entry in a change-set.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackChange {
    /// The affected track.
    pub track_id: TrackId,
    /// The current (possibly unchanged) title.
    pub new_title: String,
    /// The current (possibly unchanged) explicit flag.
    pub explicit: bool,
    /// The uploaded audio URL, present only when new audio was attached.
    pub audio_url: Option<String>,
}

/// The minimal difference between a draft and its originating release.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet {
    /// The new release title. Present iff an override was set on the draft,
    /// even when the text matches the original.
    pub release_title: Option<String>,
    /// The uploaded cover URL. Present iff a new cover was attached.
    pub cover_url: Option<String>,
    /// Entries for diverging tracks only, in original track order.
    pub tracks: Vec<TrackChange>,
}

impl ChangeSet {
    /// Build the change-set for a draft, folding in uploaded asset URLs.
    ///
    /// A track diverges when its title or explicit flag differs from the
    /// original or a new audio URL was produced for it. Entries keep the
    /// original track order; a track appears at most once.
    pub fn build(original: &Release, draft: &Draft, uploaded: &UploadedAssets) -> Self {
        let mut tracks = vec![];
        for edit in draft.tracks() {
            let Some(orig) = original.track(&edit.id) else {
                continue;
            };
            let audio_url = uploaded.track_audio.get(&edit.id).cloned();
            if edit.title != orig.title || edit.explicit != orig.explicit || audio_url.is_some() {
                tracks.push(TrackChange {
                    track_id: edit.id.clone(),
                    new_title: edit.title.clone(),
                    explicit: edit.explicit,
                    audio_url,
                });
            }
        }

        ChangeSet {
            release_title: draft.release_title_override().map(str::to_string),
            cover_url: uploaded.cover_url.clone(),
            tracks,
        }
    }

    /// Whether the change-set carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.release_title.is_none() && self.cover_url.is_none() && self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReleaseId, ReleaseType, Track};

    fn release(track_titles: &[&str]) -> Release {
        Release {
            id: ReleaseId("sweez-city".to_string()),
            title: "$weezCity".to_string(),
            release_type: ReleaseType::Album,
            release_date: "2025-12-25".to_string(),
            cover_art: "https://example.com/cover.jpg".to_string(),
            tracks: track_titles
                .iter()
                .enumerate()
                .map(|(index, title)| Track {
                    id: TrackId((index + 1).to_string()),
                    title: title.to_string(),
                    duration: "2:00".to_string(),
                    explicit: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_clean_draft_builds_empty_changeset() {
        let original = release(&["Intro", "Outro"]);
        let draft = Draft::new(&original);
        let changes = ChangeSet::build(&original, &draft, &UploadedAssets::default());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_single_retitle_yields_single_entry() {
        // Scenario: retitle track 1, leave track 2 untouched.
        let original = release(&["Intro", "Outro"]);
        let one = TrackId("1".to_string());
        let draft = Draft::new(&original).with_track_title(&one, "Intro (Remix)");

        let changes = ChangeSet::build(&original, &draft, &UploadedAssets::default());
        assert_eq!(changes.tracks.len(), 1);
        assert_eq!(changes.tracks[0].track_id, one);
        assert_eq!(changes.tracks[0].new_title, "Intro (Remix)");
        assert_eq!(changes.tracks[0].audio_url, None);
        assert!(changes.release_title.is_none());
        assert!(changes.cover_url.is_none());
    }

    #[test]
    fn test_entries_keep_original_order() {
        let original = release(&["One", "Two", "Three"]);
        let three = TrackId("3".to_string());
        let one = TrackId("1".to_string());
        // Edit the later track first; the change-set must not follow edit
        // order.
        let draft = Draft::new(&original)
            .with_track_title(&three, "Three (VIP)")
            .with_track_title(&one, "One (VIP)");

        let changes = ChangeSet::build(&original, &draft, &UploadedAssets::default());
        let ids: Vec<_> = changes.tracks.iter().map(|c| c.track_id.0.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_new_audio_carries_url_and_current_fields() {
        let original = release(&["Intro", "Outro"]);
        let two = TrackId("2".to_string());
        let draft = Draft::new(&original).with_track_audio(
            &two,
            crate::PendingAsset::new(vec![1], "outro.mp3", "audio/mpeg"),
        );

        let uploaded = UploadedAssets {
            cover_url: None,
            track_audio: HashMap::from([(two.clone(), "https://cdn.example/outro".to_string())]),
        };
        let changes = ChangeSet::build(&original, &draft, &uploaded);
        assert_eq!(changes.tracks.len(), 1);
        // The entry carries the unchanged title and flag alongside the URL.
        assert_eq!(changes.tracks[0].new_title, "Outro");
        assert!(!changes.tracks[0].explicit);
        assert_eq!(
            changes.tracks[0].audio_url.as_deref(),
            Some("https://cdn.example/outro")
        );
    }

    #[test]
    fn test_title_override_present_even_when_identical() {
        let original = release(&["Intro"]);
        let draft = Draft::new(&original).with_release_title("$weezCity");
        let changes = ChangeSet::build(&original, &draft, &UploadedAssets::default());
        assert_eq!(changes.release_title.as_deref(), Some("$weezCity"));
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_uploaded_cover_sets_cover_url() {
        let original = release(&["Intro"]);
        let draft = Draft::new(&original).with_cover(crate::PendingAsset::new(
            vec![1],
            "cover.png",
            "image/png",
        ));
        let uploaded = UploadedAssets {
            cover_url: Some("https://cdn.example/cover".to_string()),
            track_audio: HashMap::new(),
        };
        let changes = ChangeSet::build(&original, &draft, &uploaded);
        assert_eq!(changes.cover_url.as_deref(), Some("https://cdn.example/cover"));
        assert!(changes.tracks.is_empty());
    }
}
