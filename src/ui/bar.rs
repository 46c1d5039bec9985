//! The playback bar: now-playing text, transport glyphs, the seek gauge and
//! the volume gauge.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
};

use crate::config::UiSettings;
use crate::playback::{OptionalControls, PlaybackSession, PlaybackStatus, PositionSource, RepeatMode};

pub const IDLE_TEXT: &str = "No music playing.";

/// Block title: the playback status plus the up-next count when non-zero.
pub(super) fn bar_title(status: PlaybackStatus, queued: usize) -> String {
    let state = match status {
        PlaybackStatus::Idle => "idle",
        PlaybackStatus::Paused => "paused",
        PlaybackStatus::Playing => "now playing",
    };
    if queued == 0 {
        format!(" {state} ")
    } else {
        format!(" {state} · {queued} up next ")
    }
}

/// Fraction of `value` over `max`, clamped to 0..=1.
fn ratio(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).clamp(0.0, 1.0)
}

fn volume_glyph(muted: bool, percent: u8) -> &'static str {
    match (muted, percent) {
        (true, _) | (_, 0) => "🔇",
        (_, 1..=49) => "🔉",
        _ => "🔊",
    }
}

fn transport_line<S: PositionSource>(
    session: &PlaybackSession<S>,
    controls: OptionalControls,
    liked: bool,
) -> Line<'static> {
    let play = if session.is_playing() { "⏸" } else { "▶" };
    let mut spans = vec![
        Span::raw("⏮  "),
        Span::styled(play, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  ⏭"),
    ];
    if controls.shuffle {
        let style = if session.shuffle() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled("shuffle", style));
    }
    if controls.repeat {
        let (text, style) = match session.repeat() {
            RepeatMode::Off => ("repeat", Style::default().add_modifier(Modifier::DIM)),
            RepeatMode::All => ("repeat", Style::default().fg(Color::Cyan)),
            RepeatMode::One => ("repeat 1", Style::default().fg(Color::Cyan)),
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(text, style));
    }
    if controls.like {
        spans.push(Span::raw("   "));
        spans.push(if liked {
            Span::styled("♥", Style::default().fg(Color::Red))
        } else {
            Span::raw("♡")
        });
    }
    Line::from(spans)
}

/// Render the bar into `area`. Idle sessions show only `IDLE_TEXT`.
pub fn render_bar<S: PositionSource>(
    frame: &mut Frame,
    area: Rect,
    session: &PlaybackSession<S>,
    controls: OptionalControls,
    liked: bool,
    queued: usize,
    ui: &UiSettings,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(bar_title(session.status(), queued));
    let Some(track) = session.current_track() else {
        let idle = Paragraph::new(IDLE_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(idle, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let title = Line::from(vec![
        Span::styled(track.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" · "),
        Span::styled(track.artist.clone(), Style::default().add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(title), top[0]);
    frame.render_widget(
        Paragraph::new(transport_line(session, controls, liked)).alignment(Alignment::Right),
        top[1],
    );

    let elapsed = session.elapsed_seconds();
    let max = session.slider_max();
    let label = super::time_text(elapsed, track.duration_seconds, ui).unwrap_or_default();
    let seek = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .ratio(ratio(elapsed, max))
        .label(label);
    frame.render_widget(seek, rows[1]);

    let percent = session.volume_percent();
    let volume = LineGauge::default()
        .filled_style(Style::default().fg(Color::Yellow))
        .ratio(ratio(u64::from(percent), 100))
        .label(format!("{} {:>3}%", volume_glyph(session.is_muted(), percent), percent));
    frame.render_widget(volume, rows[2]);
}
