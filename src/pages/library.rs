use crate::catalog::{
    self, CatalogItem, LIBRARY_ALBUMS, LIBRARY_ARTISTS, LIBRARY_LIKED_SONGS, LIBRARY_PLAYLISTS,
};

use super::{PageView, Section};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LibraryTab {
    #[default]
    Playlists,
    LikedSongs,
    Artists,
    Albums,
}

impl LibraryTab {
    const ALL: [LibraryTab; 4] = [
        LibraryTab::Playlists,
        LibraryTab::LikedSongs,
        LibraryTab::Artists,
        LibraryTab::Albums,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Playlists => "Playlists",
            Self::LikedSongs => "Liked Songs",
            Self::Artists => "Artists",
            Self::Albums => "Albums",
        }
    }

    fn items(self) -> &'static [CatalogItem] {
        match self {
            Self::Playlists => LIBRARY_PLAYLISTS,
            Self::LikedSongs => LIBRARY_LIKED_SONGS,
            Self::Artists => LIBRARY_ARTISTS,
            Self::Albums => LIBRARY_ALBUMS,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct LibraryPage {
    tab: LibraryTab,
    cursor: usize,
}

impl LibraryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> LibraryTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: LibraryTab) {
        if self.tab != tab {
            self.tab = tab;
            self.cursor = 0;
        }
    }
}

impl PageView for LibraryPage {
    fn sections(&self) -> Vec<Section> {
        vec![Section::new(self.tab.label(), self.tab.items())]
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn find_item(&self, id: &str) -> Option<CatalogItem> {
        catalog::find_item(
            &[LIBRARY_LIKED_SONGS, LIBRARY_PLAYLISTS, LIBRARY_ARTISTS, LIBRARY_ALBUMS],
            id,
        )
        .cloned()
    }

    fn next_tab(&mut self) {
        let i = (self.tab.index() + 1) % LibraryTab::ALL.len();
        self.set_tab(LibraryTab::ALL[i]);
    }

    fn prev_tab(&mut self) {
        let len = LibraryTab::ALL.len();
        self.set_tab(LibraryTab::ALL[(self.tab.index() + len - 1) % len]);
    }

    fn tabs(&self) -> Option<(Vec<&'static str>, usize)> {
        Some((
            LibraryTab::ALL.iter().map(|t| t.label()).collect(),
            self.tab.index(),
        ))
    }
}
