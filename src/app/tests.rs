use super::*;
use crate::catalog::{self, ItemKind};
use crate::pages::{
    CardIntent, LibraryTab, LoginError, LoginOutcome, NavTarget, PageView, RowIntent, Route,
};
use crate::playback::{
    ClockTick, ManualClock, PlaybackCmd, PlaybackSession, PlaybackStatus, RepeatMode,
};
use rand::{SeedableRng, rngs::StdRng};

fn app_at(route: Route) -> App<ManualClock> {
    App::new(PlaybackSession::new(ManualClock::default(), 0.5), route)
}

fn tick(app: &mut App<ManualClock>) -> bool {
    let generation = app.session.clock().armed.unwrap_or(u64::MAX);
    app.on_tick(ClockTick { generation })
}

fn current(app: &App<ManualClock>) -> Option<&str> {
    app.session.current_track_id()
}

fn liked_songs_app() -> App<ManualClock> {
    let mut app = app_at(Route::Home);
    app.go_to(NavTarget::LikedSongs);
    app
}

#[test]
fn card_play_loads_a_placeholder_track() {
    let mut app = app_at(Route::Home);
    let mut rng = StdRng::seed_from_u64(3);
    assert!(app.handle_card_intent_with(CardIntent::Play("album1"), &mut rng));

    let track = app.session.current_track().cloned();
    let track = track.as_ref();
    assert_eq!(track.map(|t| t.title.as_str()), Some("Doraemon's Future Funk"));
    assert_eq!(track.map(|t| t.artist.as_str()), Some("An upbeat journey"));
    let secs = track.map(|t| t.duration_seconds).unwrap_or(0);
    assert!(catalog::CARD_DURATION_RANGE.contains(&secs));
    assert_eq!(app.session.status(), PlaybackStatus::Playing);

    // Playing the same card again keeps playing.
    app.handle_card_intent(CardIntent::Play("album1"));
    assert!(app.session.is_playing());
}

#[test]
fn unknown_ids_are_ignored() {
    let mut app = app_at(Route::Home);
    assert!(!app.handle_card_intent(CardIntent::Play("nope")));
    assert!(!app.handle_row_intent(RowIntent::PlayPause("s1")));
    assert_eq!(app.session.status(), PlaybackStatus::Idle);
}

#[test]
fn search_rows_toggle_playback() {
    let mut app = app_at(Route::Home);
    app.go_to(NavTarget::Search);
    app.search.push_char('n');
    assert!(app.activate_selected());
    assert_eq!(current(&app), Some("s1"));
    assert_eq!(app.session.slider_max(), 30);
    assert!(app.session.is_playing());

    assert!(app.activate_selected());
    assert_eq!(app.session.status(), PlaybackStatus::Paused);
}

#[test]
fn session_survives_navigation() {
    let mut app = app_at(Route::Home);
    app.activate_selected();
    tick(&mut app);
    tick(&mut app);

    app.go_to(NavTarget::Library);
    assert_eq!(current(&app), Some("album1"));
    assert_eq!(app.session.elapsed_seconds(), 2);
    assert!(app.session.is_playing());
}

#[test]
fn open_and_back_through_detail() {
    let mut app = app_at(Route::Home);
    assert!(app.open_selected());
    assert_eq!(
        app.route(),
        Route::Detail {
            kind: ItemKind::Album,
            id: "album1"
        }
    );
    assert!(app.can_go_back());
    assert_eq!(app.detail.tracks().len(), 3);

    assert!(app.back());
    assert_eq!(app.route(), Route::Home);
    assert!(!app.back());
}

#[test]
fn top_level_navigation_resets_back_stack() {
    let mut app = app_at(Route::Home);
    app.handle_card_intent(CardIntent::Open(ItemKind::Playlist, "playlist1"));
    app.go_to(NavTarget::Search);
    assert!(!app.can_go_back());
}

#[test]
fn liked_songs_entry_opens_library_tab() {
    let app = liked_songs_app();
    assert_eq!(app.route(), Route::Library);
    assert_eq!(app.library.tab(), LibraryTab::LikedSongs);
}

#[test]
fn create_playlist_only_sets_status() {
    let mut app = app_at(Route::Home);
    app.go_to(NavTarget::CreatePlaylist);
    assert_eq!(app.route(), Route::Home);
    assert!(app.status().is_some());
}

#[test]
fn login_success_goes_home() {
    let mut app = app_at(Route::Login);
    assert!(app.active_page().is_none());
    assert_eq!(app.submit_login(), Ok(LoginOutcome::LoggedIn));
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn login_failure_stays_put() {
    let mut app = app_at(Route::Login);
    app.login.password.clear();
    assert_eq!(app.submit_login(), Err(LoginError::MissingFields));
    assert_eq!(app.route(), Route::Login);
}

#[test]
fn idle_bar_ignores_gestures() {
    let mut app = app_at(Route::Home);
    assert!(!app.playback(PlaybackCmd::PlayPause));
    assert!(!app.playback(PlaybackCmd::SkipNext));
    assert!(!app.playback(PlaybackCmd::LikeCurrent));
    assert!(app.liked().is_empty());
}

#[test]
fn skip_next_walks_the_page_list() {
    let mut app = liked_songs_app();
    app.activate_selected();
    assert_eq!(current(&app), Some("ls1"));

    assert!(app.playback(PlaybackCmd::SkipNext));
    assert_eq!(current(&app), Some("ls2"));
    assert_eq!(app.session.elapsed_seconds(), 0);

    // End of a non-repeating list.
    app.playback(PlaybackCmd::SkipNext);
    assert_eq!(current(&app), Some("ls2"));
    assert_eq!(app.status(), Some("End of list"));

    app.playback(PlaybackCmd::ToggleRepeat);
    assert_eq!(app.session.repeat(), RepeatMode::All);
    app.playback(PlaybackCmd::SkipNext);
    assert_eq!(current(&app), Some("ls1"));
}

#[test]
fn skip_next_prefers_the_queue() {
    let mut app = liked_songs_app();
    app.library.set_cursor(1);
    assert!(app.queue_selected());
    assert_eq!(app.queue().len(), 1);

    app.library.set_cursor(0);
    app.activate_selected();
    app.playback(PlaybackCmd::SkipNext);
    assert_eq!(current(&app), Some("ls2"));
    assert!(app.queue().is_empty());
}

#[test]
fn skip_previous_restarts_after_three_seconds() {
    let mut app = liked_songs_app();
    app.library.set_cursor(1);
    app.activate_selected();
    for _ in 0..4 {
        tick(&mut app);
    }
    assert_eq!(app.session.elapsed_seconds(), 4);

    app.playback(PlaybackCmd::SkipPrevious);
    assert_eq!(current(&app), Some("ls2"));
    assert_eq!(app.session.elapsed_seconds(), 0);

    app.playback(PlaybackCmd::SkipPrevious);
    assert_eq!(current(&app), Some("ls1"));
}

#[test]
fn skip_previous_at_list_start_restarts() {
    let mut app = liked_songs_app();
    app.activate_selected();
    tick(&mut app);
    app.playback(PlaybackCmd::SkipPrevious);
    assert_eq!(current(&app), Some("ls1"));
    assert_eq!(app.session.elapsed_seconds(), 0);
}

#[test]
fn repeat_one_restarts_on_skip() {
    let mut app = liked_songs_app();
    app.activate_selected();
    app.session.set_repeat(RepeatMode::One);
    tick(&mut app);
    app.playback(PlaybackCmd::PlayPause);
    assert!(!app.session.is_playing());

    app.playback(PlaybackCmd::SkipNext);
    assert_eq!(current(&app), Some("ls1"));
    assert_eq!(app.session.elapsed_seconds(), 0);
    assert!(app.session.is_playing());
}

#[test]
fn like_from_bar_and_rows_share_the_set() {
    let mut app = liked_songs_app();
    app.activate_selected();
    assert!(app.playback(PlaybackCmd::LikeCurrent));
    assert!(app.is_liked("ls1"));

    app.like_selected();
    assert!(!app.is_liked("ls1"));
    assert_eq!(app.status(), Some("Removed from Liked Songs"));
}

#[test]
fn play_all_and_shuffle_on_detail() {
    let mut app = app_at(Route::Home);
    assert!(!app.play_all());

    app.navigate(Route::Detail {
        kind: ItemKind::Album,
        id: "album1",
    });
    assert!(app.play_all());
    assert_eq!(current(&app), Some("t1"));
    assert_eq!(app.session.slider_max(), 185);

    assert!(app.shuffle_play());
    assert!(matches!(current(&app), Some("t1" | "t2" | "t3")));
}

#[test]
fn play_all_on_missing_detail_does_nothing() {
    let mut app = app_at(Route::Home);
    app.navigate(Route::Detail {
        kind: ItemKind::Artist,
        id: "artist1",
    });
    assert!(!app.play_all());
    assert!(!app.shuffle_play());
    assert_eq!(app.session.status(), PlaybackStatus::Idle);
}

#[test]
fn next_index_without_shuffle() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(next_index(None, 3, false, RepeatMode::Off, &mut rng), Some(0));
    assert_eq!(next_index(Some(1), 3, false, RepeatMode::Off, &mut rng), Some(2));
    assert_eq!(next_index(Some(2), 3, false, RepeatMode::Off, &mut rng), None);
    assert_eq!(next_index(Some(2), 3, false, RepeatMode::All, &mut rng), Some(0));
    assert_eq!(next_index(None, 0, false, RepeatMode::All, &mut rng), None);
}

#[test]
fn shuffle_never_picks_the_current_entry() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let i = next_index(Some(1), 4, true, RepeatMode::Off, &mut rng);
        assert!(matches!(i, Some(0 | 2 | 3)));
    }
    assert_eq!(next_index(Some(0), 1, true, RepeatMode::Off, &mut rng), Some(0));
}

#[test]
fn previous_index_cases() {
    assert_eq!(previous_index(Some(2), 3, RepeatMode::Off), Some(1));
    assert_eq!(previous_index(Some(0), 3, RepeatMode::Off), None);
    assert_eq!(previous_index(Some(0), 3, RepeatMode::All), Some(2));
    assert_eq!(previous_index(None, 3, RepeatMode::All), None);
}
