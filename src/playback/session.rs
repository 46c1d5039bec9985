//! The playback session: current track, play/pause, synthetic elapsed time,
//! volume and mute, plus the clock that drives elapsed time.
//!
//! Every transition that can change whether time should advance ends with
//! `sync_clock`, so arming and disarming the position source happen in the
//! same `&mut self` call as the transition that caused them.

use super::clock::PositionSource;
use super::types::{ClockTick, PlaybackStatus, RepeatMode, Track};

/// Slider maximum used when no track is loaded or the track has no duration.
pub const DEFAULT_SLIDER_MAX: u64 = 100;

/// Volume restored by unmute when the pre-mute snapshot was 0.
pub const UNMUTE_FALLBACK_PERCENT: u8 = 50;

pub struct PlaybackSession<S: PositionSource> {
    track: Option<Track>,
    playing: bool,
    elapsed: u64,

    volume: u8,
    muted: bool,
    pre_mute_volume: u8,

    repeat: RepeatMode,
    shuffle: bool,

    clock: S,
    generation: u64,
    ticking: bool,
}

impl<S: PositionSource> PlaybackSession<S> {
    /// Create an idle session. `initial_volume` is a 0–1 fraction.
    pub fn new(clock: S, initial_volume: f32) -> Self {
        let volume = fraction_to_percent(initial_volume);
        Self {
            track: None,
            playing: false,
            elapsed: 0,
            volume,
            muted: false,
            pre_mute_volume: volume,
            repeat: RepeatMode::default(),
            shuffle: false,
            clock,
            generation: 0,
            ticking: false,
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn current_track_id(&self) -> Option<&str> {
        self.track.as_ref().map(|t| t.id.as_str())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True if `id` is the loaded track (playing or paused).
    pub fn is_current(&self, id: &str) -> bool {
        self.current_track_id() == Some(id)
    }

    /// True if `id` is the loaded track and it is playing.
    pub fn is_playing_track(&self, id: &str) -> bool {
        self.playing && self.is_current(id)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }

    pub fn volume_percent(&self) -> u8 {
        self.volume
    }

    pub fn volume_fraction(&self) -> f32 {
        f32::from(self.volume) / 100.0
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[cfg(test)]
    pub fn pre_mute_volume_percent(&self) -> u8 {
        self.pre_mute_volume
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.next();
        self.repeat
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.track, self.playing) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    /// Upper bound of the seek slider: the track duration, or
    /// `DEFAULT_SLIDER_MAX` for absent or zero-length tracks.
    pub fn slider_max(&self) -> u64 {
        match &self.track {
            Some(t) if t.duration_seconds > 0 => t.duration_seconds,
            _ => DEFAULT_SLIDER_MAX,
        }
    }

    #[cfg(test)]
    /// Whether the position source is currently armed.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    #[cfg(test)]
    /// Generation of the current (or most recent) arming.
    pub fn clock_generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn clock(&self) -> &S {
        &self.clock
    }

    /// Row-style selection: a new id loads and plays from 0, the loaded id
    /// toggles play/pause and keeps its elapsed time.
    pub fn select_track(&mut self, track: Track) {
        if self.is_current(&track.id) {
            self.playing = !self.playing;
            tracing::debug!(id = %track.id, playing = self.playing, "re-selected current track");
            self.sync_clock(false);
            return;
        }
        self.load(track);
    }

    /// Card-style selection: a new id loads and plays from 0, the loaded id
    /// keeps its elapsed time and is (re)started.
    pub fn play_track(&mut self, track: Track) {
        if self.is_current(&track.id) {
            self.playing = true;
            tracing::debug!(id = %track.id, "resumed current track");
            self.sync_clock(false);
            return;
        }
        self.load(track);
    }

    fn load(&mut self, track: Track) {
        tracing::info!(
            id = %track.id,
            title = %track.title,
            duration = track.duration_seconds,
            "loaded track"
        );
        self.track = Some(track);
        self.elapsed = 0;
        self.playing = true;
        self.sync_clock(true);
    }

    #[cfg(test)]
    /// Unload the current track and return to `Idle`.
    pub fn clear(&mut self) {
        self.track = None;
        self.playing = false;
        self.elapsed = 0;
        self.sync_clock(false);
    }

    /// Flip the playing flag. Permitted with no track loaded; the clock only
    /// runs once a track is present.
    pub fn toggle_play_pause(&mut self) {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "play/pause toggled");
        self.sync_clock(false);
    }

    /// Jump to `seconds`. The value is trusted as-is; range checks belong to
    /// the slider that produced it.
    pub fn seek(&mut self, seconds: u64) {
        self.elapsed = seconds;
        tracing::debug!(seconds, "seek");
        self.sync_clock(false);
    }

    /// Set the volume (0–100). Dragging to 0 also marks the session muted.
    /// Returns the resulting volume as a 0–1 fraction.
    pub fn set_volume(&mut self, percent: u8) -> f32 {
        self.volume = percent.min(100);
        self.muted = self.volume == 0;
        tracing::debug!(volume = self.volume, muted = self.muted, "volume changed");
        self.volume_fraction()
    }

    /// Mute (snapshotting the volume) or unmute (restoring it, or
    /// `UNMUTE_FALLBACK_PERCENT` if the snapshot is 0). Returns the resulting
    /// volume as a 0–1 fraction.
    pub fn toggle_mute(&mut self) -> f32 {
        if self.muted {
            self.volume = if self.pre_mute_volume > 0 {
                self.pre_mute_volume
            } else {
                UNMUTE_FALLBACK_PERCENT
            };
            self.muted = false;
        } else {
            self.pre_mute_volume = self.volume;
            self.volume = 0;
            self.muted = true;
        }
        tracing::debug!(muted = self.muted, volume = self.volume, "mute toggled");
        self.volume_fraction()
    }

    /// Apply one clock tick. Ticks from a stale generation are ignored.
    /// Returns true when elapsed time changed.
    pub fn on_tick(&mut self, tick: ClockTick) -> bool {
        if !self.ticking || tick.generation != self.generation {
            return false;
        }
        let Some(duration) = self.track.as_ref().map(|t| t.duration_seconds) else {
            return false;
        };

        let before = self.elapsed;
        self.elapsed = if self.elapsed < duration {
            self.elapsed + 1
        } else {
            duration
        };
        if self.elapsed == duration {
            tracing::debug!(duration, "reached end of track");
        }
        self.sync_clock(false);
        self.elapsed != before
    }

    fn should_tick(&self) -> bool {
        self.playing
            && self
                .track
                .as_ref()
                .is_some_and(|t| self.elapsed != t.duration_seconds)
    }

    /// Arm or disarm the position source to match the current state.
    /// `restart` forces a fresh arming even if one is already running.
    fn sync_clock(&mut self, restart: bool) {
        let should_tick = self.should_tick();
        if should_tick && (restart || !self.ticking) {
            self.generation += 1;
            self.clock.arm(self.generation);
            self.ticking = true;
        } else if !should_tick && self.ticking {
            self.clock.disarm();
            self.generation += 1;
            self.ticking = false;
        }
    }
}

fn fraction_to_percent(fraction: f32) -> u8 {
    if !fraction.is_finite() {
        return UNMUTE_FALLBACK_PERCENT;
    }
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}
