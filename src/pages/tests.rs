use super::detail::NOT_FOUND_MESSAGE;
use super::login::DEMO_EMAIL;
use super::search::SearchTab;
use super::*;
use rand::{SeedableRng, rngs::StdRng};

fn ids(page: &dyn PageView) -> Vec<&'static str> {
    page.sections()
        .iter()
        .flat_map(|s| s.items.iter().map(|i| i.id()))
        .collect()
}

#[test]
fn home_lists_three_sections_in_order() {
    let home = HomePage::new();
    let titles: Vec<String> = home.sections().into_iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec!["New Releases", "Recently Played", "Doraemon's Picks for You"]
    );
    assert_eq!(home.item_count(), 8);
    assert!(home.playable_songs().is_empty());
}

#[test]
fn cursor_wraps_both_ways() {
    let mut home = HomePage::new();
    home.prev();
    assert_eq!(home.cursor(), 7);
    home.next();
    assert_eq!(home.cursor(), 0);
    home.next();
    assert_eq!(home.selected_item().map(|i| i.id()), Some("playlist1"));
    home.last();
    assert_eq!(home.selected_item().map(|i| i.id()), Some("dp2"));
}

#[test]
fn home_resolves_ids_across_sections() {
    let home = HomePage::new();
    assert_eq!(home.find_item("dp1").map(|i| i.kind()), Some(ItemKind::Playlist));
    assert!(home.find_item("s1").is_none());
}

#[test]
fn search_without_query_shows_nothing() {
    let mut search = SearchPage::new();
    assert!(search.sections().is_empty());
    assert!(search.tabs().is_none());
    // Cursor movement on an empty page stays put.
    search.next();
    assert_eq!(search.cursor(), 0);
    assert!(search.selected_item().is_none());
}

#[test]
fn search_tabs_switch_result_lists() {
    let mut search = SearchPage::new();
    search.start_editing();
    for c in "nobita".chars() {
        search.push_char(c);
    }
    assert_eq!(ids(&search), vec!["s1", "s2", "a1", "a2"]);
    assert_eq!(search.sections()[0].title, "Top Results for \"nobita\" · Songs");

    search.next_tab();
    assert_eq!(search.tab(), SearchTab::Songs);
    assert_eq!(search.sections()[0].title, "Songs matching \"nobita\"");
    assert_eq!(ids(&search), vec!["s1", "s2"]);

    search.next_tab();
    search.next_tab();
    assert_eq!(ids(&search), vec!["art1"]);

    search.prev_tab();
    search.prev_tab();
    search.prev_tab();
    assert_eq!(search.tab(), SearchTab::All);
    search.prev_tab();
    assert_eq!(search.tab(), SearchTab::Playlists);
    assert_eq!(search.tabs().map(|(_, i)| i), Some(4));
}

#[test]
fn search_songs_fall_back_to_180_seconds() {
    let search = SearchPage::new();
    assert_eq!(search.song_fallback_seconds(), 180);
    // Lookups cover every list, not just the visible tab.
    assert!(search.find_item("p1").is_some());
}

#[test]
fn search_backspace_to_empty_hides_results() {
    let mut search = SearchPage::new();
    search.push_char('x');
    search.set_cursor(3);
    search.pop_char();
    assert!(!search.has_query());
    assert_eq!(search.cursor(), 0);
}

#[test]
fn library_tabs_and_liked_songs() {
    let mut library = LibraryPage::new();
    assert_eq!(ids(&library), vec!["pl1", "pl2"]);
    library.next_tab();
    assert_eq!(library.tab(), LibraryTab::LikedSongs);
    let songs: Vec<_> = library.playable_songs().into_iter().map(|s| s.id).collect();
    assert_eq!(songs, vec!["ls1", "ls2"]);
    assert_eq!(library.song_fallback_seconds(), 200);

    library.set_cursor(1);
    library.set_tab(LibraryTab::LikedSongs);
    assert_eq!(library.cursor(), 1, "same tab keeps the cursor");
    library.set_tab(LibraryTab::Albums);
    assert_eq!(library.cursor(), 0);
    assert_eq!(ids(&library), vec!["sa1"]);
}

#[test]
fn detail_lists_tracks_under_the_detail_title() {
    let detail = DetailPage::open(ItemKind::Playlist, "playlist1");
    let tracks = detail.tracks();
    assert_eq!(tracks.len(), 2);
    assert!(tracks.iter().all(|s| s.album == Some("Nobita Naps Mix")));
    assert_eq!(detail.play_all_target(), Some("t4"));
    assert_eq!(
        detail.fallback_art(),
        Some("https://picsum.photos/seed/nobita_playlist1_detail/400/400")
    );
    assert!(detail.empty_message().is_none());
}

#[test]
fn detail_shuffle_picks_one_of_its_tracks() {
    let detail = DetailPage::open(ItemKind::Album, "album1");
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let id = detail.shuffle_target(&mut rng);
        assert!(matches!(id, Some("t1" | "t2" | "t3")));
    }
}

#[test]
fn unknown_detail_route_is_not_found() {
    // Kind is part of the route: album1 is not a playlist.
    let detail = DetailPage::open(ItemKind::Playlist, "album1");
    assert!(detail.detail().is_none());
    assert_eq!(detail.empty_message().as_deref(), Some(NOT_FOUND_MESSAGE));
    assert!(detail.sections().is_empty());
    assert!(detail.play_all_target().is_none());
    let mut rng = StdRng::seed_from_u64(1);
    assert!(detail.shuffle_target(&mut rng).is_none());
}

#[test]
fn login_accepts_demo_credentials() {
    let mut form = LoginForm::new();
    assert_eq!(form.email, DEMO_EMAIL);
    assert_eq!(form.submit(), Ok(LoginOutcome::LoggedIn));
    assert!(form.error().is_none());
}

#[test]
fn login_rejects_missing_and_wrong_credentials() {
    let mut form = LoginForm::new();
    form.focus_next();
    assert_eq!(form.focus(), LoginField::Password);
    while !form.password.is_empty() {
        form.pop_char();
    }
    assert_eq!(form.submit(), Err(LoginError::MissingFields));
    assert_eq!(
        form.error().map(|e| e.to_string()).as_deref(),
        Some("Email and Password are required.")
    );

    form.push_char('x');
    assert_eq!(form.submit(), Err(LoginError::InvalidCredentials));
    assert!(form.error().map(|e| e.to_string()).unwrap_or_default().contains("nobita@doraemon.com"));
}

#[test]
fn register_success_switches_back_to_login() {
    let mut form = LoginForm::new();
    form.toggle_mode();
    assert!(form.is_register_mode());
    assert_eq!(form.fields().len(), 3);
    form.email = "suneo@doraemon.com".into();
    assert_eq!(form.submit(), Ok(LoginOutcome::Registered));
    assert!(!form.is_register_mode());
}

#[test]
fn register_rejects_mismatched_confirmation() {
    let mut form = LoginForm::new();
    form.toggle_mode();
    form.focus_prev();
    assert_eq!(form.focus(), LoginField::ConfirmPassword);
    form.push_char('z');
    assert_eq!(form.submit(), Err(LoginError::PasswordMismatch));
    assert!(form.is_register_mode());

    // Leaving register mode moves focus off the hidden field.
    form.toggle_mode();
    assert_eq!(form.focus(), LoginField::Password);
    assert!(form.error().is_none());
}

#[test]
fn sidebar_keys_map_to_targets() {
    assert_eq!(NavTarget::from_key('1'), Some(NavTarget::Home));
    assert_eq!(NavTarget::from_key('3'), Some(NavTarget::Library));
    assert_eq!(NavTarget::from_key('5'), Some(NavTarget::LikedSongs));
    assert_eq!(NavTarget::from_key('9'), None);
    assert_eq!(SIDEBAR_MAIN.len(), 3);
}
