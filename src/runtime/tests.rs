use super::event_loop::{EventLoopState, handle_key_event};
use super::startup::{build_app, repeat_mode};
use crate::app::App;
use crate::config::{RepeatSetting, Settings};
use crate::pages::{LibraryTab, LoginError, PageView, Route};
use crate::playback::{ManualClock, PlaybackStatus, RepeatMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn home_settings() -> Settings {
    let mut settings = Settings::default();
    settings.ui.skip_login = true;
    settings
}

fn press(app: &mut App<ManualClock>, settings: &Settings, state: &mut EventLoopState, code: KeyCode) {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), settings, app, state);
}

fn type_str(app: &mut App<ManualClock>, settings: &Settings, state: &mut EventLoopState, s: &str) {
    for c in s.chars() {
        press(app, settings, state, KeyCode::Char(c));
    }
}

#[test]
fn build_app_applies_playback_defaults() {
    let mut settings = home_settings();
    settings.playback.initial_volume = 0.3;
    settings.playback.repeat = RepeatSetting::One;
    settings.playback.shuffle = true;

    let app = build_app(ManualClock::default(), &settings);
    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.session.volume_percent(), 30);
    assert_eq!(app.session.repeat(), RepeatMode::One);
    assert!(app.session.shuffle());
    assert_eq!(app.session.status(), PlaybackStatus::Idle);
}

#[test]
fn app_starts_on_login_by_default() {
    let app = build_app(ManualClock::default(), &Settings::default());
    assert_eq!(app.route(), Route::Login);
}

#[test]
fn repeat_settings_map_one_to_one() {
    assert_eq!(repeat_mode(RepeatSetting::Off), RepeatMode::Off);
    assert_eq!(repeat_mode(RepeatSetting::All), RepeatMode::All);
    assert_eq!(repeat_mode(RepeatSetting::One), RepeatMode::One);
}

#[test]
fn login_enter_with_demo_credentials_goes_home() {
    let settings = Settings::default();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    // `q` is just a character on the login form.
    press(&mut app, &settings, &mut state, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, &settings, &mut state, KeyCode::Backspace);

    press(&mut app, &settings, &mut state, KeyCode::Enter);
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn login_with_cleared_password_shows_error() {
    let settings = Settings::default();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Tab);
    for _ in 0.."doraemon".len() {
        press(&mut app, &settings, &mut state, KeyCode::Backspace);
    }
    press(&mut app, &settings, &mut state, KeyCode::Enter);
    assert_eq!(app.route(), Route::Login);
    assert_eq!(app.login.error(), Some(&LoginError::MissingFields));

    handle_key_event(
        KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        &settings,
        &mut app,
        &mut state,
    );
    assert!(app.login.is_register_mode());

    press(&mut app, &settings, &mut state, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn search_editing_captures_keys() {
    let settings = home_settings();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Char('/'));
    assert_eq!(app.route(), Route::Search);
    assert!(app.search.is_editing());

    type_str(&mut app, &settings, &mut state, "quiz");
    assert!(!app.should_quit);
    assert_eq!(app.search.query(), "quiz");
    press(&mut app, &settings, &mut state, KeyCode::Backspace);
    assert_eq!(app.search.query(), "qui");

    press(&mut app, &settings, &mut state, KeyCode::Esc);
    assert!(!app.search.is_editing());
    press(&mut app, &settings, &mut state, KeyCode::Char(']'));
    assert_eq!(app.search.tabs().map(|(_, i)| i), Some(1));

    press(&mut app, &settings, &mut state, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn gg_and_g_jump_to_ends() {
    let settings = home_settings();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Char('G'));
    assert_eq!(app.home.cursor(), 7);
    press(&mut app, &settings, &mut state, KeyCode::Char('g'));
    assert_eq!(app.home.cursor(), 7);
    press(&mut app, &settings, &mut state, KeyCode::Char('g'));
    assert_eq!(app.home.cursor(), 0);

    // An interrupted prefix does not jump.
    press(&mut app, &settings, &mut state, KeyCode::Char('j'));
    press(&mut app, &settings, &mut state, KeyCode::Char('g'));
    press(&mut app, &settings, &mut state, KeyCode::Char('k'));
    press(&mut app, &settings, &mut state, KeyCode::Char('g'));
    assert_eq!(app.home.cursor(), 0);
    assert!(state.pending_gg);
}

#[test]
fn number_keys_follow_the_sidebar() {
    let settings = home_settings();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Char('3'));
    assert_eq!(app.route(), Route::Library);
    press(&mut app, &settings, &mut state, KeyCode::Char('5'));
    assert_eq!(app.library.tab(), LibraryTab::LikedSongs);
    press(&mut app, &settings, &mut state, KeyCode::Char('4'));
    assert_eq!(app.route(), Route::Library);
    assert!(app.status().is_some());
    press(&mut app, &settings, &mut state, KeyCode::Char('1'));
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn transport_keys_drive_the_session() {
    let mut settings = home_settings();
    settings.controls.seek_seconds = 10;
    settings.controls.volume_step = 20;
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Char('5'));
    press(&mut app, &settings, &mut state, KeyCode::Enter);
    assert_eq!(app.session.current_track_id(), Some("ls1"));

    press(&mut app, &settings, &mut state, KeyCode::Char('L'));
    assert_eq!(app.session.elapsed_seconds(), 10);
    press(&mut app, &settings, &mut state, KeyCode::Char('H'));
    press(&mut app, &settings, &mut state, KeyCode::Char('H'));
    assert_eq!(app.session.elapsed_seconds(), 0);

    press(&mut app, &settings, &mut state, KeyCode::Char('-'));
    assert_eq!(app.session.volume_percent(), 30);
    press(&mut app, &settings, &mut state, KeyCode::Char('m'));
    assert!(app.session.is_muted());
    press(&mut app, &settings, &mut state, KeyCode::Char('m'));
    assert_eq!(app.session.volume_percent(), 30);

    press(&mut app, &settings, &mut state, KeyCode::Char(' '));
    assert_eq!(app.session.status(), PlaybackStatus::Paused);
    press(&mut app, &settings, &mut state, KeyCode::Char('l'));
    assert_eq!(app.session.current_track_id(), Some("ls2"));

    press(&mut app, &settings, &mut state, KeyCode::Char('F'));
    assert!(app.is_liked("ls2"));
}

#[test]
fn zero_and_dollar_seek_to_track_ends() {
    let settings = home_settings();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    // Idle bar: absolute seeks are swallowed.
    press(&mut app, &settings, &mut state, KeyCode::Char('$'));
    assert_eq!(app.session.elapsed_seconds(), 0);

    press(&mut app, &settings, &mut state, KeyCode::Char('5'));
    press(&mut app, &settings, &mut state, KeyCode::Enter);
    let max = app.session.slider_max();
    assert!(max > 0);

    press(&mut app, &settings, &mut state, KeyCode::Char('$'));
    assert_eq!(app.session.elapsed_seconds(), max);
    assert!(app.session.is_playing());

    press(&mut app, &settings, &mut state, KeyCode::Char('0'));
    assert_eq!(app.session.elapsed_seconds(), 0);
    assert_eq!(app.route(), Route::Library);
}

#[test]
fn open_and_escape_from_detail() {
    let settings = home_settings();
    let mut app = build_app(ManualClock::default(), &settings);
    let mut state = EventLoopState::default();

    press(&mut app, &settings, &mut state, KeyCode::Char('o'));
    assert!(matches!(app.route(), Route::Detail { id: "album1", .. }));
    press(&mut app, &settings, &mut state, KeyCode::Char('P'));
    assert_eq!(app.session.current_track_id(), Some("t1"));

    press(&mut app, &settings, &mut state, KeyCode::Esc);
    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.session.current_track_id(), Some("t1"));
}
