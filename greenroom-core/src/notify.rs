use serde::Serialize;

use greenroom_state::{ChangeSet, Release};

/// The accent color of the portal's embeds.
const EMBED_COLOR: u32 = 16_745_216;

/// A chat-webhook message: one content line plus embeds. The portal always
/// sends exactly one embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    /// The plain content line.
    pub content: String,
    /// The structured embed blocks.
    pub embeds: Vec<Embed>,
}

/// One structured embed block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    /// The embed title.
    pub title: String,
    /// The embed description line.
    pub description: String,
    /// The accent color.
    pub color: u32,
    /// The labelled fields.
    pub fields: Vec<EmbedField>,
    /// The footer line.
    pub footer: EmbedFooter,
}

/// A labelled field inside an embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    /// The field label.
    pub name: String,
    /// The field value.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// An embed footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    /// The footer text.
    pub text: String,
}

/// Render an edit-request change-set into its webhook notification.
///
/// The reviewer reads this, so everything is prose: one line per changed
/// track, `None` placeholders for untouched sections.
pub fn edit_request_payload(
    artist_name: &str,
    release: &Release,
    changes: &ChangeSet,
    requested_at: chrono::DateTime<chrono::Utc>,
) -> WebhookPayload {
    let track_changes = if changes.tracks.is_empty() {
        "None".to_string()
    } else {
        changes
            .tracks
            .iter()
            .map(|change| {
                format!(
                    "Track {}: \"{}\"{}{}",
                    change.track_id,
                    change.new_title,
                    if change.explicit { " [EXPLICIT]" } else { "" },
                    if change.audio_url.is_some() {
                        " (with new audio)"
                    } else {
                        ""
                    },
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    WebhookPayload {
        content: format!("**New Change Request from {artist_name}**"),
        embeds: vec![Embed {
            title: release.title.clone(),
            description: format!(
                "Release: {}",
                changes.release_title.as_deref().unwrap_or(&release.title)
            ),
            color: EMBED_COLOR,
            fields: vec![
                EmbedField {
                    name: "Artist".to_string(),
                    value: artist_name.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "Release Type".to_string(),
                    value: release.release_type.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "Cover Art Updated".to_string(),
                    value: if changes.cover_url.is_some() { "Yes" } else { "No" }.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "Album Name Change".to_string(),
                    value: match changes.release_title.as_deref() {
                        Some(new_title) => format!("{} → {}", release.title, new_title),
                        None => "None".to_string(),
                    },
                    inline: false,
                },
                EmbedField {
                    name: "Track Changes".to_string(),
                    value: track_changes,
                    inline: false,
                },
            ],
            footer: EmbedFooter {
                text: format!("Requested at {}", requested_at.format("%Y-%m-%d %H:%M:%S UTC")),
            },
        }],
    }
}

#[derive(Debug)]
/// An error delivering a webhook notification.
pub enum WebhookError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// The webhook responded with a non-success status.
    Rejected {
        /// The HTTP status code.
        status: u16,
    },
}
impl std::fmt::Display for WebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebhookError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            WebhookError::Rejected { status } => write!(f, "Webhook rejected: {status}"),
        }
    }
}
impl std::error::Error for WebhookError {}
impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        WebhookError::ReqwestError(e)
    }
}

/// The notification webhook, as submissions need it.
#[allow(async_fn_in_trait)]
pub trait Webhook {
    /// Deliver a notification. Anything but a success status fails the
    /// submission.
    async fn send(&self, payload: &WebhookPayload) -> Result<(), WebhookError>;
}

/// A client for one webhook URL.
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}
impl WebhookClient {
    /// Create a client for a webhook URL.
    pub fn new(url: impl Into<String>) -> Self {
        WebhookClient {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}
impl Webhook for WebhookClient {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use greenroom_state::{
        Draft, PendingAsset, ReleaseId, ReleaseType, Track, TrackId, UploadedAssets,
    };

    fn release() -> Release {
        Release {
            id: ReleaseId("xans-wrld".to_string()),
            title: "Xan$wrld".to_string(),
            release_type: ReleaseType::Single,
            release_date: "2026-01-03".to_string(),
            cover_art: "https://example.com/cover.jpg".to_string(),
            tracks: vec![Track {
                id: TrackId("1".to_string()),
                title: "Xan$wrld".to_string(),
                duration: "2:10".to_string(),
                explicit: true,
            }],
        }
    }

    fn at() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_untouched_sections_render_none() {
        let original = release();
        let one = TrackId("1".to_string());
        let draft = Draft::new(&original).with_track_title(&one, "Xan$wrld (VIP)");
        let changes = ChangeSet::build(&original, &draft, &UploadedAssets::default());

        let payload = edit_request_payload("Yuno $weez", &original, &changes, at());
        assert_eq!(payload.content, "**New Change Request from Yuno $weez**");

        let embed = &payload.embeds[0];
        assert_eq!(embed.fields[2].value, "No");
        assert_eq!(embed.fields[3].value, "None");
        assert_eq!(
            embed.fields[4].value,
            "Track 1: \"Xan$wrld (VIP)\" [EXPLICIT]"
        );
        assert_eq!(embed.footer.text, "Requested at 2026-03-01 12:00:00 UTC");
    }

    #[test]
    fn test_full_change_request_payload() {
        let original = release();
        let one = TrackId("1".to_string());
        let draft = Draft::new(&original)
            .with_release_title("Xan$wrld Deluxe")
            .with_cover(PendingAsset::new(vec![1], "cover.png", "image/png"))
            .with_track_audio(&one, PendingAsset::new(vec![2], "vip.mp3", "audio/mpeg"));

        let uploaded = UploadedAssets {
            cover_url: Some("https://cdn.example/cover".to_string()),
            track_audio: std::collections::HashMap::from([(
                one.clone(),
                "https://cdn.example/audio".to_string(),
            )]),
        };
        let changes = ChangeSet::build(&original, &draft, &uploaded);
        let payload = edit_request_payload("Yuno $weez", &original, &changes, at());

        let embed = &payload.embeds[0];
        assert_eq!(embed.description, "Release: Xan$wrld Deluxe");
        assert_eq!(embed.fields[2].value, "Yes");
        assert_eq!(embed.fields[3].value, "Xan$wrld → Xan$wrld Deluxe");
        assert_eq!(
            embed.fields[4].value,
            "Track 1: \"Xan$wrld\" [EXPLICIT] (with new audio)"
        );
    }
}
