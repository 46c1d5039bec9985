//! Page view state: what each page lists, where its cursor is and which
//! catalog it resolves clicks against.
//!
//! Pages own no playback state. The single `PlaybackSession` lives in the
//! `App` and is lent to whichever page handles an event.

mod detail;
mod home;
mod intents;
mod library;
mod login;
mod search;
mod sidebar;

pub use detail::DetailPage;
pub use home::HomePage;
pub use intents::{CardIntent, RowIntent};
pub use library::{LibraryPage, LibraryTab};
pub use login::{LoginError, LoginField, LoginForm, LoginOutcome};
pub use search::{BROWSE_HINT, BROWSE_PROMPT, QUERY_PLACEHOLDER, SearchPage};
pub use sidebar::{NavTarget, SIDEBAR_MAIN, SIDEBAR_SECONDARY};

use crate::catalog::{CatalogItem, ItemKind, Song};

/// Where the app is. Detail routes carry the `(kind, id)` of the content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Search,
    Library,
    Detail { kind: ItemKind, id: &'static str },
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Library => "Your Library",
            Self::Detail { .. } => "Details",
        }
    }
}

/// A titled group of items rendered together (a card grid or a song list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

impl Section {
    pub fn new(title: impl Into<String>, items: &[CatalogItem]) -> Self {
        Self {
            title: title.into(),
            items: items.to_vec(),
        }
    }
}

/// Shared behaviour of the browsable pages (everything but login).
pub trait PageView {
    /// Sections currently on screen, in display order.
    fn sections(&self) -> Vec<Section>;

    fn cursor(&self) -> usize;
    fn set_cursor(&mut self, cursor: usize);

    /// Duration used for songs whose display duration does not parse.
    fn song_fallback_seconds(&self) -> u64 {
        200
    }

    /// Artwork used for songs that carry none.
    fn fallback_art(&self) -> Option<&'static str> {
        None
    }

    /// Resolve a clicked id against this page's catalog.
    fn find_item(&self, id: &str) -> Option<CatalogItem> {
        self.sections()
            .into_iter()
            .flat_map(|s| s.items)
            .find(|item| item.id() == id)
    }

    /// Songs on screen in display order; what skip next/previous walks.
    fn playable_songs(&self) -> Vec<Song> {
        self.sections()
            .into_iter()
            .flat_map(|s| s.items)
            .filter_map(|item| item.as_song().cloned())
            .collect()
    }

    fn item_count(&self) -> usize {
        self.sections().iter().map(|s| s.items.len()).sum()
    }

    fn selected_item(&self) -> Option<CatalogItem> {
        self.sections()
            .into_iter()
            .flat_map(|s| s.items)
            .nth(self.cursor())
    }

    /// Move the cursor to the next item, wrapping around.
    fn next(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.set_cursor(0);
            return;
        }
        self.set_cursor((self.cursor() + 1) % count);
    }

    /// Move the cursor to the previous item, wrapping around.
    fn prev(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.set_cursor(0);
            return;
        }
        let cursor = self.cursor().min(count - 1);
        self.set_cursor(if cursor == 0 { count - 1 } else { cursor - 1 });
    }

    fn first(&mut self) {
        self.set_cursor(0);
    }

    fn last(&mut self) {
        self.set_cursor(self.item_count().saturating_sub(1));
    }

    /// Keep the cursor inside the current item list after it changed.
    fn clamp_cursor(&mut self) {
        let count = self.item_count();
        if self.cursor() >= count {
            self.set_cursor(count.saturating_sub(1));
        }
    }

    /// Switch to the next tab, for pages that have tabs.
    fn next_tab(&mut self) {}

    /// Switch to the previous tab, for pages that have tabs.
    fn prev_tab(&mut self) {}

    /// Tab labels and the active index, for pages that have tabs.
    fn tabs(&self) -> Option<(Vec<&'static str>, usize)> {
        None
    }
}

#[cfg(test)]
mod tests;
