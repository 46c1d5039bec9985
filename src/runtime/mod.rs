use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::playback::{ClockTick, TickerClock};

mod event_loop;
mod logging;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> anyhow::Result<()> {
    let (settings, warning) = settings::load_settings();
    logging::init(&settings.logging)?;
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting doratunes");

    let (tick_tx, tick_rx) = mpsc::channel::<ClockTick>();
    let clock = TickerClock::new(tick_tx, Duration::from_millis(settings.playback.tick_ms));
    let mut app = startup::build_app(clock, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &tick_rx, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &run_result {
        tracing::error!(%err, "event loop failed");
    }
    run_result
}
