use crate::catalog::ItemKind;

/// What a song row asks its page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIntent {
    /// Play the song, or toggle it if it is already loaded.
    PlayPause(&'static str),
    Like(&'static str),
    AddToQueue(&'static str),
}

/// What a content card asks its page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIntent {
    Play(&'static str),
    Like(&'static str),
    /// Navigate to the card's detail page.
    Open(ItemKind, &'static str),
}
