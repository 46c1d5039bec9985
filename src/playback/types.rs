//! Small value types shared by the playback session, the bar and the pages.

/// A playable unit as seen by the playback bar.
///
/// Built fresh from a catalog entry on every selection and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album_art_url: Option<String>,
    pub duration_seconds: u64,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album_art_url: None,
            duration_seconds,
        }
    }

    pub fn with_album_art(mut self, url: impl Into<String>) -> Self {
        self.album_art_url = Some(url.into());
        self
    }
}

/// Coarse state of the playback session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No track loaded.
    #[default]
    Idle,
    Paused,
    Playing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Stop at the end of the current list.
    #[default]
    Off,
    /// Wrap around to the start of the current list.
    All,
    /// Repeat the current song.
    One,
}

impl RepeatMode {
    /// Cycle `Off -> All -> One -> Off`.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::All => "all",
            Self::One => "one",
        }
    }
}

/// User gestures the playback bar understands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCmd {
    /// Toggle play/pause.
    PlayPause,
    /// Skip to the next track.
    SkipNext,
    /// Go to the previous track.
    SkipPrevious,
    /// Nudge the seek slider by the given number of seconds (positive or negative).
    SeekBy(i64),
    /// Drop the seek slider at an absolute position.
    SeekTo(u64),
    /// Nudge the volume slider by the given number of percentage points.
    VolumeBy(i16),
    /// Mute / unmute.
    ToggleMute,
    ToggleRepeat,
    ToggleShuffle,
    /// Like the currently loaded track.
    LikeCurrent,
}

/// One beat of the synthetic clock.
///
/// `generation` identifies the arming that produced it; ticks from a
/// cancelled arming are ignored by the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTick {
    pub generation: u64,
}
