use rand::{Rng, seq::IndexedRandom};

use crate::catalog::{self, CatalogItem, ContentDetail, ItemKind, Song};

use super::{PageView, Section};

pub const NOT_FOUND_MESSAGE: &str = "Content not found. Maybe it's in Doraemon's 4D pocket?";

/// Detail view of an album or playlist, addressed by `(kind, id)`.
#[derive(Debug)]
pub struct DetailPage {
    detail: Option<&'static ContentDetail>,
    cursor: usize,
}

impl Default for DetailPage {
    fn default() -> Self {
        Self::open(ItemKind::Album, "")
    }
}

impl DetailPage {
    pub fn open(kind: ItemKind, id: &'static str) -> Self {
        let detail = catalog::find_detail(kind, id);
        if detail.is_none() {
            tracing::debug!(%kind, id, "no content detail for route");
        }
        Self {
            detail,
            cursor: 0,
        }
    }

    pub fn detail(&self) -> Option<&'static ContentDetail> {
        self.detail
    }

    /// Tracks as listed on the page; the album column shows the detail title.
    pub fn tracks(&self) -> Vec<Song> {
        let Some(detail) = self.detail else {
            return Vec::new();
        };
        detail.tracks.iter().map(|song| listed(detail, song)).collect()
    }

    /// Song "Play All" starts: the first track.
    pub fn play_all_target(&self) -> Option<&'static str> {
        self.detail.and_then(|d| d.tracks.first()).map(|s| s.id)
    }

    /// Song "Shuffle Play" starts: a uniformly random track.
    pub fn shuffle_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        self.detail.and_then(|d| d.tracks.choose(rng)).map(|s| s.id)
    }

    /// Placeholder shown instead of the track list, if any.
    pub fn empty_message(&self) -> Option<String> {
        match self.detail {
            None => Some(NOT_FOUND_MESSAGE.to_string()),
            Some(d) if d.tracks.is_empty() => Some(format!(
                "This {} seems to be empty. Maybe Doraemon took all the songs with his \"Borrowing Gadget\"?",
                d.kind.label().to_lowercase()
            )),
            Some(_) => None,
        }
    }
}

fn listed(detail: &ContentDetail, song: &Song) -> Song {
    Song {
        album: Some(detail.title),
        ..song.clone()
    }
}

impl PageView for DetailPage {
    fn sections(&self) -> Vec<Section> {
        if self.detail.is_none() {
            return Vec::new();
        }
        vec![Section {
            title: "Tracks".to_string(),
            items: self.tracks().into_iter().map(CatalogItem::Song).collect(),
        }]
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn fallback_art(&self) -> Option<&'static str> {
        self.detail.map(|d| d.image_url)
    }

    fn find_item(&self, id: &str) -> Option<CatalogItem> {
        let detail = self.detail?;
        let song = catalog::find_song(detail.tracks, id)?;
        Some(CatalogItem::Song(listed(detail, song)))
    }
}
