/// Where a sidebar entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Search,
    Library,
    LikedSongs,
    /// Shown but not wired to anything.
    CreatePlaylist,
}

#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    /// Key that jumps to the entry.
    pub key: char,
    pub target: NavTarget,
}

pub static SIDEBAR_MAIN: &[NavEntry] = &[
    NavEntry { label: "Home", key: '1', target: NavTarget::Home },
    NavEntry { label: "Search", key: '2', target: NavTarget::Search },
    NavEntry { label: "Your Library", key: '3', target: NavTarget::Library },
];

pub static SIDEBAR_SECONDARY: &[NavEntry] = &[
    NavEntry { label: "Create Playlist", key: '4', target: NavTarget::CreatePlaylist },
    NavEntry { label: "Liked Songs", key: '5', target: NavTarget::LikedSongs },
];

impl NavTarget {
    pub fn from_key(key: char) -> Option<Self> {
        SIDEBAR_MAIN
            .iter()
            .chain(SIDEBAR_SECONDARY)
            .find(|e| e.key == key)
            .map(|e| e.target)
    }
}
