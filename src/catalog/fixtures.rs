//! Hardcoded placeholder catalog, grouped by the page that shows it.

use super::model::{CatalogItem, ContentDetail, Entity, ItemKind, Song};

const fn entity(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
) -> Entity {
    Entity {
        id,
        title,
        description: Some(description),
        image_url,
    }
}

const fn album(id: &'static str, title: &'static str, desc: &'static str, img: &'static str) -> CatalogItem {
    CatalogItem::Album(entity(id, title, desc, img))
}

const fn playlist(id: &'static str, title: &'static str, desc: &'static str, img: &'static str) -> CatalogItem {
    CatalogItem::Playlist(entity(id, title, desc, img))
}

const fn artist(id: &'static str, title: &'static str, desc: &'static str, img: &'static str) -> CatalogItem {
    CatalogItem::Artist(entity(id, title, desc, img))
}

const fn song(
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    album: Option<&'static str>,
    duration: &'static str,
    album_art_url: &'static str,
) -> Song {
    Song {
        id,
        title,
        artist,
        album,
        duration,
        album_art_url: Some(album_art_url),
    }
}

// Home

pub static HOME_NEW_RELEASES: &[CatalogItem] = &[
    album("album1", "Doraemon's Future Funk", "An upbeat journey", "https://picsum.photos/seed/doraemon_album1/300/300"),
    playlist("playlist1", "Nobita Naps Mix", "Chill beats for lazy afternoons", "https://picsum.photos/seed/nobita_playlist1/300/300"),
    artist("artist1", "Gian Grooves", "Powerful Vocals", "https://picsum.photos/seed/gian_artist1/300/300"),
    album("album2", "Shizuka Sings Strings", "Violin Virtuoso", "https://picsum.photos/seed/shizuka_album2/300/300"),
];

pub static HOME_RECENTLY_PLAYED: &[CatalogItem] = &[
    album("album3", "Anywhere Door Anthems", "Travel Tunes", "https://picsum.photos/seed/anywhere_door/300/300"),
    playlist("playlist2", "Time Machine Melodies", "Blast from the Past", "https://picsum.photos/seed/timemachine_playlist/300/300"),
];

pub static HOME_PICKS: &[CatalogItem] = &[
    playlist("dp1", "Gadget Grooves", "Future Sounds", "https://picsum.photos/seed/gadget_grooves/300/300"),
    album("dp2", "Pocket Power Ballads", "Emotional Beats", "https://picsum.photos/seed/pocket_ballads/300/300"),
];

// Search

pub static SEARCH_SONGS: &[CatalogItem] = &[
    CatalogItem::Song(song("s1", "Doraemon's Bell Sound", "Future Gadget Lab", Some("Tech Beats"), "0:30", "https://picsum.photos/seed/dora_bell_song/60/60")),
    CatalogItem::Song(song("s2", "Nobita Sleeping Theme", "Dreamy Vibes", Some("Lazy Days"), "3:15", "https://picsum.photos/seed/nobita_sleep_song/60/60")),
];

pub static SEARCH_ALBUMS: &[CatalogItem] = &[
    album("a1", "22nd Century Hits", "Various Artists", "https://picsum.photos/seed/22_century_album/150/150"),
    album("a2", "Suneo Collection", "Suneo Honekawa", "https://picsum.photos/seed/suneo_album/150/150"),
];

pub static SEARCH_ARTISTS: &[CatalogItem] = &[
    artist("art1", "Dorami Chan", "Pop Idol", "https://picsum.photos/seed/dorami_artist/150/150"),
];

pub static SEARCH_PLAYLISTS: &[CatalogItem] = &[
    playlist("p1", "Gian's Concert Rehearsal", "Loud and Proud", "https://picsum.photos/seed/gian_playlist/150/150"),
];

// Library

pub static LIBRARY_PLAYLISTS: &[CatalogItem] = &[
    playlist("pl1", "Doraemon's Gadget Grooves", "My custom mix", "https://picsum.photos/seed/dora_playlist_lib/150/150"),
    playlist("pl2", "Relax with Nobita", "Calm and sleepy", "https://picsum.photos/seed/nobita_playlist_lib/150/150"),
];

pub static LIBRARY_LIKED_SONGS: &[CatalogItem] = &[
    CatalogItem::Song(song("ls1", "Hopter Anthem", "DJ Take-copter", Some("Sky High"), "3:45", "https://picsum.photos/seed/copter_song/60/60")),
    CatalogItem::Song(song("ls2", "Shizuka's Violin Serenade", "Shizuka Minamoto", Some("Classical Moments"), "4:10", "https://picsum.photos/seed/shizuka_song/60/60")),
];

pub static LIBRARY_ARTISTS: &[CatalogItem] = &[
    artist("fa1", "The Doraemons Band", "Legendary Group", "https://picsum.photos/seed/doraemons_band/150/150"),
];

pub static LIBRARY_ALBUMS: &[CatalogItem] = &[
    album("sa1", "Songs of the 22nd Century", "Various Future Artists", "https://picsum.photos/seed/22century_album_lib/150/150"),
];

// Content detail

static ALBUM1_TRACKS: &[Song] = &[
    song("t1", "Anywhere Door Groove", "Future Gadget Lab", Some("Doraemon's Future Funk"), "3:05", "https://picsum.photos/seed/doraemon_album1_detail/60/60"),
    song("t2", "Time Kerchief Twist", "Future Gadget Lab", Some("Doraemon's Future Funk"), "2:50", "https://picsum.photos/seed/doraemon_album1_detail/60/60"),
    song("t3", "Memory Bread Beat", "Future Gadget Lab", Some("Doraemon's Future Funk"), "4:15", "https://picsum.photos/seed/doraemon_album1_detail/60/60"),
];

static PLAYLIST1_TRACKS: &[Song] = &[
    song("t4", "Dreamy Cloud Hop", "LoFi Noby", Some("Naptime Beats"), "3:22", "https://picsum.photos/seed/nobita_playlist1_detail/60/60"),
    song("t5", "Lazy Afternoon Vibe", "Chill Cat", None, "2:58", "https://picsum.photos/seed/nobita_playlist1_detail/60/60"),
];

pub static CONTENT_DETAILS: &[ContentDetail] = &[
    ContentDetail {
        kind: ItemKind::Album,
        id: "album1",
        title: "Doraemon's Future Funk",
        creator: Some("Future Gadget Lab"),
        image_url: "https://picsum.photos/seed/doraemon_album1_detail/400/400",
        tracks: ALBUM1_TRACKS,
    },
    ContentDetail {
        kind: ItemKind::Playlist,
        id: "playlist1",
        title: "Nobita Naps Mix",
        creator: Some("User123"),
        image_url: "https://picsum.photos/seed/nobita_playlist1_detail/400/400",
        tracks: PLAYLIST1_TRACKS,
    },
];

// Sidebar

pub static SIDEBAR_PLAYLISTS: &[&str] = &["Doraemon OSTs", "Chill Vibes", "Nobita's Study Mix"];
