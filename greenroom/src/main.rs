//! The artist portal, terminal edition: log in with your shared password,
//! browse your releases, and submit change requests.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use greenroom_core as gc;
use greenroom_state::{Artist, PendingAsset, Release, TrackId, format_release_date};

#[derive(Parser)]
#[command(name = "greenroom", about = "Artist release portal")]
struct Cli {
    /// Your artist password.
    #[arg(long)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List your releases.
    Releases,
    /// Show one release's tracklist.
    Show {
        /// The release ID.
        release: String,
    },
    /// Submit an edit request for a release.
    RequestChanges {
        /// The release ID.
        release: String,
        /// Override the release title.
        #[arg(long)]
        title: Option<String>,
        /// Retitle a track, as `<track-id>=<new title>`.
        #[arg(long = "track-title", value_parser = parse_key_val)]
        track_titles: Vec<(String, String)>,
        /// Set a track's explicit flag, as `<track-id>=<true|false>`.
        #[arg(long = "track-explicit", value_parser = parse_key_val)]
        track_explicit: Vec<(String, String)>,
        /// Replace a track's audio, as `<track-id>=<file path>`.
        #[arg(long = "track-audio", value_parser = parse_key_val)]
        track_audio: Vec<(String, String)>,
        /// Replace the cover image with a local file.
        #[arg(long)]
        cover: Option<PathBuf>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <id>=<value>, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let cli = Cli::parse();

    // Load and save config at startup
    let config = gc::config::Config::load();
    config.save();

    let store = greenroom_supabase::Client::new(
        config.store.url.as_str(),
        config.store.api_key.as_str(),
    );
    let artists = gc::load_all(&store).await;
    let artist = gc::authenticate(&artists, &cli.password).context("invalid password")?;

    match cli.command {
        Command::Releases => list_releases(artist),
        Command::Show { release } => {
            let release = find_release(artist, &release)?;
            show_release(artist, release);
        }
        Command::RequestChanges {
            release,
            title,
            track_titles,
            track_explicit,
            track_audio,
            cover,
        } => {
            let release = find_release(artist, &release)?;
            let mut session = gc::EditSession::new(&artist.name, release);

            if let Some(title) = title {
                session.edit(|draft| draft.with_release_title(title));
            }
            for (id, new_title) in track_titles {
                let id = TrackId(id);
                session.edit(|draft| draft.with_track_title(&id, new_title));
            }
            for (id, value) in track_explicit {
                let explicit: bool = value
                    .parse()
                    .with_context(|| format!("`{value}` is not true/false"))?;
                let id = TrackId(id);
                session.edit(|draft| draft.with_track_explicit(&id, explicit));
            }
            for (id, path) in track_audio {
                let bytes =
                    std::fs::read(&path).with_context(|| format!("reading audio file {path}"))?;
                let asset = PendingAsset::new(bytes, file_name(Path::new(&path)), "audio/mpeg");
                let id = TrackId(id);
                session.edit(|draft| draft.with_track_audio(&id, asset));
            }
            if let Some(path) = cover {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("reading cover file {}", path.display()))?;
                let content_type = image_content_type(&path);
                let asset = PendingAsset::new(bytes, file_name(&path), content_type);
                session.edit(|draft| draft.with_cover(asset));
            }

            if !session.draft().is_dirty() {
                println!("Nothing to submit.");
                return Ok(());
            }

            let storage = greenroom_storage::Client::new(
                config.storage.base_url.as_str(),
                config.storage.bucket.as_str(),
            );
            let webhook = gc::WebhookClient::new(config.notifications.webhook_url.as_str());
            match session.submit(&storage, &webhook, chrono::Utc::now()).await {
                gc::SubmitStatus::Success => println!("Change request submitted."),
                _ => anyhow::bail!("submission failed, your edits were kept — try again"),
            }
        }
    }

    Ok(())
}

fn list_releases(artist: &Artist) {
    println!("{} — {} release(s)", artist.name, artist.releases.len());
    for release in &artist.releases {
        println!(
            "  {:<16} {} [{}] — {}, {} track(s)",
            release.id.0,
            release.title,
            release.release_type,
            format_release_date(&release.release_date),
            release.tracks.len(),
        );
    }
}

fn show_release(artist: &Artist, release: &Release) {
    println!("{} — {}", artist.name, release.title);
    println!(
        "{}, released {}",
        release.release_type,
        format_release_date(&release.release_date)
    );
    println!("Cover: {}", release.cover_art);
    for (index, track) in release.tracks.iter().enumerate() {
        println!(
            "  {:>2}. {}{}  {}",
            index + 1,
            track.title,
            if track.explicit { " [E]" } else { "" },
            track.duration,
        );
    }
}

fn find_release<'a>(artist: &'a Artist, id: &str) -> anyhow::Result<&'a Release> {
    artist
        .releases
        .iter()
        .find(|release| release.id.0 == id)
        .with_context(|| format!("no release `{id}` — try `greenroom releases`"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn image_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("3=Intro (Remix)").unwrap(),
            ("3".to_string(), "Intro (Remix)".to_string())
        );
        // Values may contain `=`; only the first one splits.
        assert_eq!(
            parse_key_val("3=a=b").unwrap(),
            ("3".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("no-separator").is_err());
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type(Path::new("cover.png")), "image/png");
        assert_eq!(image_content_type(Path::new("cover.jpg")), "image/jpeg");
        assert_eq!(image_content_type(Path::new("cover")), "image/jpeg");
    }
}
