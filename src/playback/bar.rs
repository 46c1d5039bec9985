//! The playback bar's contract: gestures in, session transitions and
//! callbacks out.
//!
//! Rendering lives in `ui::bar`; this module only decides what a gesture
//! means. With no track loaded the bar has nothing actionable, so every
//! gesture is swallowed.

use super::clock::PositionSource;
use super::session::PlaybackSession;
use super::types::PlaybackCmd;

/// Which of the optional bar controls the owner implements. Controls not
/// offered are neither rendered nor dispatched.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct OptionalControls {
    pub repeat: bool,
    pub shuffle: bool,
    pub like: bool,
}

/// Callbacks the owner of the bar must implement.
///
/// The session is lent to each callback so the owner can apply its own
/// transition (for example, play/pause) without holding a second reference.
pub trait BarCallbacks<S: PositionSource> {
    fn on_play_pause(&mut self, session: &mut PlaybackSession<S>);
    fn on_skip_next(&mut self, session: &mut PlaybackSession<S>);
    fn on_skip_previous(&mut self, session: &mut PlaybackSession<S>);
    /// The session has already moved to `seconds` when this fires.
    fn on_seek(&mut self, session: &mut PlaybackSession<S>, seconds: u64);
    /// `volume` is a 0–1 fraction.
    fn on_volume_change(&mut self, session: &mut PlaybackSession<S>, volume: f32);

    fn optional_controls(&self) -> OptionalControls {
        OptionalControls::default()
    }

    fn on_toggle_repeat(&mut self, _session: &mut PlaybackSession<S>) {}
    fn on_toggle_shuffle(&mut self, _session: &mut PlaybackSession<S>) {}
    fn on_like_track(&mut self, _session: &mut PlaybackSession<S>, _track_id: &str) {}
}

/// Translate one bar gesture into session transitions and callbacks.
///
/// Returns false when the gesture was swallowed (idle bar or an optional
/// control the owner does not offer).
pub fn dispatch<S, C>(cmd: PlaybackCmd, session: &mut PlaybackSession<S>, callbacks: &mut C) -> bool
where
    S: PositionSource,
    C: BarCallbacks<S> + ?Sized,
{
    let Some(track_id) = session.current_track_id().map(str::to_owned) else {
        tracing::trace!(?cmd, "bar idle, gesture ignored");
        return false;
    };

    match cmd {
        PlaybackCmd::PlayPause => callbacks.on_play_pause(session),
        PlaybackCmd::SkipNext => callbacks.on_skip_next(session),
        PlaybackCmd::SkipPrevious => callbacks.on_skip_previous(session),
        PlaybackCmd::SeekBy(delta) => {
            let max = session.slider_max();
            let target = (session.elapsed_seconds() as i64)
                .saturating_add(delta)
                .clamp(0, max as i64) as u64;
            seek(session, callbacks, target);
        }
        PlaybackCmd::SeekTo(seconds) => {
            let target = seconds.min(session.slider_max());
            seek(session, callbacks, target);
        }
        PlaybackCmd::VolumeBy(delta) => {
            let target = i16::from(session.volume_percent())
                .saturating_add(delta)
                .clamp(0, 100) as u8;
            let volume = session.set_volume(target);
            callbacks.on_volume_change(session, volume);
        }
        PlaybackCmd::ToggleMute => {
            let volume = session.toggle_mute();
            callbacks.on_volume_change(session, volume);
        }
        PlaybackCmd::ToggleRepeat => {
            if !callbacks.optional_controls().repeat {
                return false;
            }
            callbacks.on_toggle_repeat(session);
        }
        PlaybackCmd::ToggleShuffle => {
            if !callbacks.optional_controls().shuffle {
                return false;
            }
            callbacks.on_toggle_shuffle(session);
        }
        PlaybackCmd::LikeCurrent => {
            if !callbacks.optional_controls().like {
                return false;
            }
            callbacks.on_like_track(session, &track_id);
        }
    }
    true
}

fn seek<S, C>(session: &mut PlaybackSession<S>, callbacks: &mut C, target: u64)
where
    S: PositionSource,
    C: BarCallbacks<S> + ?Sized,
{
    session.seek(target);
    callbacks.on_seek(session, target);
}
