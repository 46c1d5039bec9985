use crate::catalog::{self, CatalogItem, HOME_NEW_RELEASES, HOME_PICKS, HOME_RECENTLY_PLAYED};

use super::{PageView, Section};

#[derive(Debug, Default)]
pub struct HomePage {
    cursor: usize,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageView for HomePage {
    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("New Releases", HOME_NEW_RELEASES),
            Section::new("Recently Played", HOME_RECENTLY_PLAYED),
            Section::new("Doraemon's Picks for You", HOME_PICKS),
        ]
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn find_item(&self, id: &str) -> Option<CatalogItem> {
        catalog::find_item(&[HOME_NEW_RELEASES, HOME_RECENTLY_PLAYED, HOME_PICKS], id).cloned()
    }
}
