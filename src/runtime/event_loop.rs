use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::pages::{NavTarget, PageView, Route};
use crate::playback::{ClockTick, PlaybackCmd, PositionSource};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: applies clock ticks, draws and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<S: PositionSource>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<S>,
    ticks: &mpsc::Receiver<ClockTick>,
    state: &mut EventLoopState,
) -> anyhow::Result<()> {
    loop {
        while let Ok(tick) = ticks.try_recv() {
            app.on_tick(tick);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key_event(key, settings, app, state);
            }
        }

        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}

/// Apply one key press to `app`.
pub fn handle_key_event<S: PositionSource>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<S>,
    state: &mut EventLoopState,
) {
    if app.route() == Route::Login {
        state.pending_gg = false;
        handle_login_key(key, app);
        return;
    }

    if app.route() == Route::Search && app.search.is_editing() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.search.stop_editing(),
            KeyCode::Backspace => app.search.pop_char(),
            KeyCode::Char(c) if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search.push_char(c)
            }
            _ => {}
        }
        return;
    }

    app.clear_status();
    let controls = &settings.controls;
    let seek = i64::try_from(controls.seek_seconds).unwrap_or(i64::MAX);
    let volume = i16::from(controls.volume_step);

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Char('/') => {
            app.go_to(NavTarget::Search);
            app.search.start_editing();
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(target) = NavTarget::from_key(c) {
                app.go_to(target);
            }
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                if let Some(page) = app.active_page_mut() {
                    page.first();
                }
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => with_page(app, |p| p.last()),
        KeyCode::Char('j') | KeyCode::Down => with_page(app, |p| p.next()),
        KeyCode::Char('k') | KeyCode::Up => with_page(app, |p| p.prev()),
        KeyCode::Char(']') | KeyCode::Tab => with_page(app, |p| p.next_tab()),
        KeyCode::Char('[') | KeyCode::BackTab => with_page(app, |p| p.prev_tab()),
        KeyCode::Enter => {
            app.activate_selected();
        }
        KeyCode::Char('o') => {
            app.open_selected();
        }
        KeyCode::Char('f') => {
            app.like_selected();
        }
        KeyCode::Char('a') => {
            app.queue_selected();
        }
        KeyCode::Char('P') => {
            app.play_all();
        }
        KeyCode::Char('X') => {
            app.shuffle_play();
        }
        KeyCode::Char(c) => {
            let cmd = match c {
                'p' | ' ' => PlaybackCmd::PlayPause,
                'l' => PlaybackCmd::SkipNext,
                'h' => PlaybackCmd::SkipPrevious,
                'L' => PlaybackCmd::SeekBy(seek),
                'H' => PlaybackCmd::SeekBy(-seek),
                '0' => PlaybackCmd::SeekTo(0),
                '$' => PlaybackCmd::SeekTo(app.session.slider_max()),
                '+' | '=' => PlaybackCmd::VolumeBy(volume),
                '-' => PlaybackCmd::VolumeBy(-volume),
                'm' => PlaybackCmd::ToggleMute,
                'r' => PlaybackCmd::ToggleRepeat,
                's' => PlaybackCmd::ToggleShuffle,
                'F' => PlaybackCmd::LikeCurrent,
                _ => return,
            };
            app.playback(cmd);
        }
        _ => {}
    }
}

fn with_page<S: PositionSource>(app: &mut App<S>, f: impl FnOnce(&mut dyn PageView)) {
    if let Some(page) = app.active_page_mut() {
        f(page);
    }
}

fn handle_login_key<S: PositionSource>(key: KeyEvent, app: &mut App<S>) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.login.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.login.focus_prev(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.login.toggle_mode(),
        KeyCode::Enter => {
            // Errors are kept on the form and rendered there.
            let _ = app.submit_login();
        }
        KeyCode::Backspace => app.login.pop_char(),
        KeyCode::Char(c) if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.push_char(c)
        }
        _ => {}
    }
}
