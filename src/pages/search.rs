use crate::catalog::{self, CatalogItem, SEARCH_ALBUMS, SEARCH_ARTISTS, SEARCH_PLAYLISTS, SEARCH_SONGS};

use super::{PageView, Section};

pub const BROWSE_PROMPT: &str = "Search for your favorite Doraemon tunes, artists, or gadgets!";
pub const BROWSE_HINT: &str = "Try \"Take-copter Beats\" or \"Nobita\".";
pub const QUERY_PLACEHOLDER: &str = "What do you want to listen to? (e.g., Doraemon, Gadgets)";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SearchTab {
    #[default]
    All,
    Songs,
    Albums,
    Artists,
    Playlists,
}

impl SearchTab {
    const ALL: [SearchTab; 5] = [
        SearchTab::All,
        SearchTab::Songs,
        SearchTab::Albums,
        SearchTab::Artists,
        SearchTab::Playlists,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Songs => "Songs",
            Self::Albums => "Albums",
            Self::Artists => "Artists",
            Self::Playlists => "Playlists",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// The search page. Results are the fixed fixture lists; the query only
/// decides whether results are shown at all.
#[derive(Debug, Default)]
pub struct SearchPage {
    query: String,
    editing: bool,
    tab: SearchTab,
    cursor: usize,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub fn tab(&self) -> SearchTab {
        self.tab
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

}

impl PageView for SearchPage {
    fn sections(&self) -> Vec<Section> {
        if !self.has_query() {
            return Vec::new();
        }
        let q = &self.query;
        match self.tab {
            SearchTab::All => vec![
                Section::new(format!("Top Results for \"{q}\" · Songs"), SEARCH_SONGS),
                Section::new("Albums", SEARCH_ALBUMS),
            ],
            SearchTab::Songs => vec![Section::new(format!("Songs matching \"{q}\""), SEARCH_SONGS)],
            SearchTab::Albums => vec![Section::new(format!("Albums matching \"{q}\""), SEARCH_ALBUMS)],
            SearchTab::Artists => {
                vec![Section::new(format!("Artists matching \"{q}\""), SEARCH_ARTISTS)]
            }
            SearchTab::Playlists => {
                vec![Section::new(format!("Playlists matching \"{q}\""), SEARCH_PLAYLISTS)]
            }
        }
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn song_fallback_seconds(&self) -> u64 {
        180
    }

    fn find_item(&self, id: &str) -> Option<CatalogItem> {
        catalog::find_item(
            &[SEARCH_SONGS, SEARCH_ALBUMS, SEARCH_ARTISTS, SEARCH_PLAYLISTS],
            id,
        )
        .cloned()
    }

    fn next_tab(&mut self) {
        let i = (self.tab.index() + 1) % SearchTab::ALL.len();
        self.tab = SearchTab::ALL[i];
        self.cursor = 0;
    }

    fn prev_tab(&mut self) {
        let len = SearchTab::ALL.len();
        let i = (self.tab.index() + len - 1) % len;
        self.tab = SearchTab::ALL[i];
        self.cursor = 0;
    }

    fn tabs(&self) -> Option<(Vec<&'static str>, usize)> {
        if !self.has_query() {
            return None;
        }
        Some((
            SearchTab::ALL.iter().map(|t| t.label()).collect(),
            self.tab.index(),
        ))
    }
}
