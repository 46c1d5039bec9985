use std::fmt;

/// A single song as shown in a song row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub album: Option<&'static str>,
    /// Display duration, `m:ss`.
    pub duration: &'static str,
    pub album_art_url: Option<&'static str>,
}

/// Fields shared by albums, playlists and artists (the browsable cards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: &'static str,
    pub title: &'static str,
    /// Artist name, playlist blurb, etc.
    pub description: Option<&'static str>,
    pub image_url: &'static str,
}

/// Anything the catalog can list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem {
    Song(Song),
    Album(Entity),
    Playlist(Entity),
    Artist(Entity),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Song,
    Album,
    Playlist,
    Artist,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Song => "Song",
            Self::Album => "Album",
            Self::Playlist => "Playlist",
            Self::Artist => "Artist",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CatalogItem {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Song(s) => s.id,
            Self::Album(e) | Self::Playlist(e) | Self::Artist(e) => e.id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Song(s) => s.title,
            Self::Album(e) | Self::Playlist(e) | Self::Artist(e) => e.title,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Song(_) => ItemKind::Song,
            Self::Album(_) => ItemKind::Album,
            Self::Playlist(_) => ItemKind::Playlist,
            Self::Artist(_) => ItemKind::Artist,
        }
    }

    /// Second line of a row or card: the artist for songs, the description
    /// for everything else.
    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            Self::Song(s) => Some(s.artist),
            Self::Album(e) | Self::Playlist(e) | Self::Artist(e) => e.description,
        }
    }

    pub fn as_song(&self) -> Option<&Song> {
        match self {
            Self::Song(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Song(_) => None,
            Self::Album(e) | Self::Playlist(e) | Self::Artist(e) => Some(e),
        }
    }
}

/// A detail page: an album or playlist with its track list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDetail {
    pub kind: ItemKind,
    pub id: &'static str,
    pub title: &'static str,
    /// Album artist or playlist creator.
    pub creator: Option<&'static str>,
    pub image_url: &'static str,
    pub tracks: &'static [Song],
}

impl ContentDetail {
    pub fn creator_or_unknown(&self) -> &'static str {
        self.creator.unwrap_or("Unknown Creator")
    }
}
