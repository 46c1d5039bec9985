//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

mod bar;
mod page;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, BAR_CONTROLS};
use crate::config::{ControlsSettings, TimeField, UiSettings};
use crate::pages::Route;
use crate::playback::PositionSource;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("[/]", "tabs");
    map.insert("enter", "play");
    map.insert("o", "open");
    map.insert("a", "queue");
    map.insert("f", "like");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    map.insert("0/$", "start/end");
    // H/L and +/- are filled dynamically from config.
    map.insert("m", "mute");
    map.insert("r", "repeat");
    map.insert("s", "shuffle");
    map.insert("F", "like playing");
    map.insert("1-5", "sidebar");
    map.insert("/", "search");
    map.insert("esc", "back");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating seek and volume steps.
/// `[esc] back` is only listed when there is somewhere to go back to.
fn controls_text(controls: &ControlsSettings, can_go_back: bool) -> String {
    let order = [
        "j/k", "[/]", "enter", "o", "a", "f", "space/p", "h/l", "H/L", "0/$", "+/-", "m", "r",
        "s", "F", "1-5", "/", "esc", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "esc" if !can_go_back => None,
            "H/L" => Some(format!("[H/L] seek -/+{}s", controls.seek_seconds)),
            "+/-" => Some(format!("[+/-] volume {}%", controls.volume_step)),
            _ => CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn login_controls_text() -> &'static str {
    "[tab] next field | [enter] submit | [ctrl-r] login/register | [esc] quit"
}

/// Format whole seconds as `m:ss`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Build the time text (elapsed/total/remaining) per `UiSettings`.
fn time_text(elapsed: u64, total: u64, ui: &UiSettings) -> Option<String> {
    if ui.time_fields.is_empty() {
        return None;
    }
    let parts: Vec<String> = ui
        .time_fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_time(elapsed),
            TimeField::Total => format_time(total),
            TimeField::Remaining => format!("-{}", format_time(total.saturating_sub(elapsed))),
        })
        .collect();
    Some(parts.join(&ui.time_separator))
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title).padding(Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    })
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<S: PositionSource>(
    frame: &mut Frame,
    app: &App<S>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let on_login = app.route() == Route::Login;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(if on_login { 0 } else { 5 }),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DoraTunes ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if on_login {
        page::render_login(frame, chunks[1], &app.login);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(1)])
            .split(chunks[1]);
        page::render_sidebar(frame, body[0], app);
        page::render_page(frame, body[1], app);

        let liked = app
            .session
            .current_track_id()
            .is_some_and(|id| app.is_liked(id));
        bar::render_bar(
            frame,
            chunks[2],
            &app.session,
            BAR_CONTROLS,
            liked,
            app.queue().len(),
            ui_settings,
        );
    }

    let footer_text = if on_login {
        login_controls_text().to_string()
    } else {
        controls_text(controls_settings, app.can_go_back())
    };
    let footer = Paragraph::new(footer_text)
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests;
