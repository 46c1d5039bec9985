//! Id lookups over the fixture catalog and conversion of list items into
//! playable `Track`s.
//!
//! Lookups are total: an unknown id yields `None` and callers treat the
//! click as a no-op.

use rand::Rng;

use crate::playback::Track;

use super::fixtures::CONTENT_DETAILS;
use super::model::{CatalogItem, ContentDetail, Entity, ItemKind, Song};

/// Display durations given to albums, playlists and artists when played.
pub const CARD_DURATION_RANGE: std::ops::Range<u64> = 120..300;

/// Artist shown for cards without a description.
pub const FALLBACK_ARTIST: &str = "Various Artists";

/// Find an item by id across several lists, first match wins.
pub fn find_item<'a>(lists: &[&'a [CatalogItem]], id: &str) -> Option<&'a CatalogItem> {
    lists
        .iter()
        .flat_map(|list| list.iter())
        .find(|item| item.id() == id)
}

pub fn find_song<'a>(songs: &'a [Song], id: &str) -> Option<&'a Song> {
    songs.iter().find(|s| s.id == id)
}

/// Look up a detail page by route.
pub fn find_detail(kind: ItemKind, id: &str) -> Option<&'static ContentDetail> {
    CONTENT_DETAILS.iter().find(|d| d.kind == kind && d.id == id)
}

/// Parse an `m:ss` (or `h:mm:ss`) display duration into seconds.
pub fn parse_duration_text(text: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut parts = 0;
    for (i, part) in text.trim().split(':').enumerate() {
        let value: u64 = part.trim().parse().ok()?;
        if i > 0 && value >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
        parts += 1;
    }
    if !(2..=3).contains(&parts) {
        return None;
    }
    Some(total)
}

/// Build a `Track` from a song row. `fallback_seconds` is used when the
/// display duration does not parse, `fallback_art` when the song has no art.
pub fn track_from_song(song: &Song, fallback_seconds: u64, fallback_art: Option<&str>) -> Track {
    let duration = parse_duration_text(song.duration).unwrap_or(fallback_seconds);
    let track = Track::new(song.id, song.title, song.artist, duration);
    match song.album_art_url.or(fallback_art) {
        Some(url) => track.with_album_art(url),
        None => track,
    }
}

/// Build a `Track` from an album/playlist/artist card. The duration is a
/// random placeholder for display only.
pub fn track_from_entity<R: Rng + ?Sized>(entity: &Entity, rng: &mut R) -> Track {
    let duration = rng.random_range(CARD_DURATION_RANGE);
    Track::new(
        entity.id,
        entity.title,
        entity.description.unwrap_or(FALLBACK_ARTIST),
        duration,
    )
    .with_album_art(entity.image_url)
}

/// Build a `Track` for any catalog item.
pub fn track_from_item<R: Rng + ?Sized>(
    item: &CatalogItem,
    song_fallback_seconds: u64,
    rng: &mut R,
) -> Track {
    match item {
        CatalogItem::Song(song) => track_from_song(song, song_fallback_seconds, None),
        CatalogItem::Album(e) | CatalogItem::Playlist(e) | CatalogItem::Artist(e) => {
            track_from_entity(e, rng)
        }
    }
}
