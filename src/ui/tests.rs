use super::*;
use crate::catalog::ItemKind;
use crate::config::Settings;
use crate::pages::{NavTarget, PageView};
use crate::playback::{ManualClock, PlaybackCmd, PlaybackSession, PlaybackStatus};
use ratatui::{Terminal, backend::TestBackend};

fn app_at(route: Route) -> App<ManualClock> {
    App::new(PlaybackSession::new(ManualClock::default(), 0.5), route)
}

fn render(app: &App<ManualClock>, settings: &Settings) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|f| draw(f, app, &settings.ui, &settings.controls))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn format_time_is_minutes_and_padded_seconds() {
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(185), "3:05");
    assert_eq!(format_time(3600), "60:00");
}

#[test]
fn time_text_follows_configured_fields() {
    let mut ui = UiSettings::default();
    assert_eq!(time_text(65, 185, &ui).as_deref(), Some("1:05 / 3:05"));

    ui.time_fields = vec![TimeField::Remaining];
    assert_eq!(time_text(65, 185, &ui).as_deref(), Some("-2:00"));

    ui.time_fields.clear();
    assert!(time_text(65, 185, &ui).is_none());
}

#[test]
fn controls_text_uses_configured_steps() {
    let controls = ControlsSettings {
        seek_seconds: 10,
        volume_step: 2,
    };
    let text = controls_text(&controls, false);
    assert!(text.contains("[H/L] seek -/+10s"));
    assert!(text.contains("[+/-] volume 2%"));
    assert!(text.contains("[0/$] start/end"));
    assert!(text.starts_with("[j/k] up/down"));
    assert!(!text.contains("[esc]"));

    let text = controls_text(&controls, true);
    assert!(text.contains("[esc] back | [q] quit"));
}

#[test]
fn bar_title_tracks_status_and_queue() {
    assert_eq!(bar::bar_title(PlaybackStatus::Playing, 0), " now playing ");
    assert_eq!(bar::bar_title(PlaybackStatus::Paused, 2), " paused · 2 up next ");

    let mut app = app_at(Route::Home);
    app.go_to(NavTarget::LikedSongs);
    app.activate_selected();
    app.library.next();
    app.queue_selected();
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("now playing · 1 up next"));

    app.playback(PlaybackCmd::PlayPause);
    let screen = render(&app, &Settings::default());
    assert!(screen.contains(" paused · 1 up next "));
}

#[test]
fn idle_bar_says_nothing_is_playing() {
    let app = app_at(Route::Home);
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("No music playing."));
    assert!(screen.contains("New Releases"));
    assert!(screen.contains("Gian Grooves"));
}

#[test]
fn bar_shows_track_and_time() {
    let mut app = app_at(Route::Home);
    app.navigate(Route::Detail {
        kind: ItemKind::Album,
        id: "album1",
    });
    app.play_all();
    app.playback(PlaybackCmd::SeekTo(65));

    let screen = render(&app, &Settings::default());
    assert!(!screen.contains("No music playing."));
    assert!(screen.contains("Anywhere Door Groove"));
    assert!(screen.contains("1:05 / 3:05"));
    assert!(screen.contains("50%"));
    assert!(screen.contains("Created by: Future Gadget Lab"));
    assert!(screen.contains("3 songs"));
}

#[test]
fn login_screen_shows_error() {
    let mut app = app_at(Route::Login);
    app.login.password.clear();
    let _ = app.submit_login();
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("Access Your Music Pocket"));
    assert!(screen.contains("Email and Password are required."));
    assert!(!screen.contains("No music playing."));
}

#[test]
fn search_without_query_shows_browse_prompt() {
    let mut app = app_at(Route::Home);
    app.go_to(NavTarget::Search);
    let screen = render(&app, &Settings::default());
    assert!(screen.contains(crate::pages::BROWSE_PROMPT));

    app.search.push_char('x');
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("Songs matching") || screen.contains("Top Results"));
    assert!(screen.contains("Playlists"));
}

#[test]
fn missing_detail_shows_not_found() {
    let mut app = app_at(Route::Home);
    app.navigate(Route::Detail {
        kind: ItemKind::Artist,
        id: "artist1",
    });
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("Content not found."));
}

#[test]
fn selection_survives_rendering_past_section_titles() {
    let mut app = app_at(Route::Home);
    app.home.last();
    // Rendering must not panic with the cursor on the last section.
    let screen = render(&app, &Settings::default());
    assert!(screen.contains("Pocket Power Ballads"));
}
