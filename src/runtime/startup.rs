use crate::app::App;
use crate::config;
use crate::pages::Route;
use crate::playback::{PlaybackSession, PositionSource, RepeatMode};

pub fn repeat_mode(setting: config::RepeatSetting) -> RepeatMode {
    match setting {
        config::RepeatSetting::Off => RepeatMode::Off,
        config::RepeatSetting::All => RepeatMode::All,
        config::RepeatSetting::One => RepeatMode::One,
    }
}

/// Build the app with playback defaults applied to its session.
pub fn build_app<S: PositionSource>(clock: S, settings: &config::Settings) -> App<S> {
    let mut session = PlaybackSession::new(clock, settings.playback.initial_volume);
    session.set_repeat(repeat_mode(settings.playback.repeat));
    session.set_shuffle(settings.playback.shuffle);

    let start = if settings.ui.skip_login {
        Route::Home
    } else {
        Route::Login
    };
    App::new(session, start)
}
