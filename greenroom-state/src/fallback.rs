//! The bundled dataset served when the remote store is unreachable or empty.

use crate::{Artist, ArtistId, Release, ReleaseId, ReleaseType, Track, TrackId};

fn track(id: &str, title: &str, duration: &str) -> Track {
    Track {
        id: TrackId(id.to_string()),
        title: title.to_string(),
        duration: duration.to_string(),
        explicit: true,
    }
}

fn release(
    id: &str,
    title: &str,
    release_type: ReleaseType,
    release_date: &str,
    cover_art: &str,
    tracks: Vec<Track>,
) -> Release {
    Release {
        id: ReleaseId(id.to_string()),
        title: title.to_string(),
        release_type,
        release_date: release_date.to_string(),
        cover_art: cover_art.to_string(),
        tracks,
    }
}

/// The fixed artist list used whenever the store cannot provide one.
pub fn fallback_artists() -> Vec<Artist> {
    vec![
        Artist {
            id: ArtistId("yuno-sweez".to_string()),
            name: "Yuno $weez".to_string(),
            password: "Benkifiya1".to_string(),
            catalog_id: None,
            releases: vec![
                release(
                    "sweez-city",
                    "$weezCity",
                    ReleaseType::Album,
                    "2025-12-25",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music221/v4/88/94/98/8894986e-c4c6-f301-3f2e-bd0dbe21bf96/artwork.jpg/632x632bb.webp",
                    vec![
                        track("1", "fatimah", "1:24"),
                        track("2", "DONOTRUNUPONME!", "1:43"),
                        track("3", "Beamer (feat. Yuno Benz)", "1:51"),
                        track("4", "Issey Miyake", "1:57"),
                        track("5", "Oxycodone (feat. JBEETLE)", "2:49"),
                        track("6", "SUNDAYMORNINGCHURCH (feat. Jadi)", "3:20"),
                        track("7", "Let Me Interlude", "2:11"),
                        track("8", "Law Fawk Order", "1:42"),
                        track("9", "Purple Drank", "2:19"),
                        track("10", "Givenchy", "1:51"),
                    ],
                ),
                release(
                    "lost-files",
                    "lost files from $weez",
                    ReleaseType::Album,
                    "2026-01-02",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music211/v4/de/1d/ae/de1dae3c-113c-ed1a-8c08-02ebc1f779f3/artwork.jpg/632x632bb.webp",
                    vec![
                        track("1", "Lost Intro (feat. soløwøn)", "2:27"),
                        track("2", "Mona Lisa", "2:16"),
                        track("3", "Yuno $weez", "1:20"),
                        track("4", "Bugatti Way (feat. YunoKaydee)", "1:55"),
                        track("5", "Middleman", "1:50"),
                        track("6", "Boondocks (feat. svspperkk)", "3:07"),
                        track("7", "For Me (feat. svspperkk)", "2:07"),
                        track("8", "Outer Banks", "2:08"),
                        track("9", "Pain (feat. Kaminar1)", "2:25"),
                        track("10", "$he Lit", "2:03"),
                        track("11", "Lost Outro", "1:31"),
                    ],
                ),
                release(
                    "xans-wrld",
                    "Xan$wrld",
                    ReleaseType::Single,
                    "2026-01-03",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music211/v4/11/d7/27/11d7272c-67dc-1aa4-2525-2ff23f71fd33/artwork.jpg/632x632bb.webp",
                    vec![track("1", "Xan$wrld", "2:10")],
                ),
                release(
                    "boondocks",
                    "Boondocks",
                    ReleaseType::Single,
                    "2026-01-03",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music221/v4/a4/a5/15/a4a515a7-227c-6655-d26b-3e8c2e481cd4/artwork.jpg/632x632bb.webp",
                    vec![track("1", "Boondocks (feat. svspperkk & $p@de)", "3:50")],
                ),
                release(
                    "perkys",
                    "PERKY$",
                    ReleaseType::Single,
                    "2026-01-19",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music221/v4/68/73/53/68735313-0fa6-51d1-2912-9dcfb1d8d64b/artwork.jpg/632x632bb.webp",
                    vec![track("1", "PERKY$", "1:54")],
                ),
                release(
                    "payme",
                    "Pay Me!",
                    ReleaseType::Single,
                    "2026-01-19",
                    "https://is1-ssl.mzstatic.com/image/thumb/Music221/v4/12/70/a3/1270a327-2ce4-7e17-dc42-402ce499eed1/artwork.jpg/632x632bb.webp",
                    vec![track("1", "Pay Me! (feat. Yuno Benz)", "2:03")],
                ),
            ],
        },
        Artist {
            id: ArtistId("jamar".to_string()),
            name: "J@M@R".to_string(),
            password: "jamar123".to_string(),
            catalog_id: None,
            releases: vec![release(
                "freaking-music",
                "I AM THE FREAKING MUSIC",
                ReleaseType::Single,
                "2025-10-30",
                "https://is1-ssl.mzstatic.com/image/thumb/Music211/v4/bd/5b/9a/bd5b9aad-d071-d193-96f1-09a9ffdec549/artwork.jpg/632x632bb.webp",
                vec![track("1", "I AM THE FREAKING MUSIC", "2:46")],
            )],
        },
    ]
}
