//! Playback state model: the session state machine, its clock and the
//! playback bar contract.
//!
//! Nothing here plays audio. Elapsed time is driven by a `PositionSource`,
//! which in the shipped binary is a synthetic one-second ticker.

mod bar;
mod clock;
mod session;
mod types;

pub use bar::{BarCallbacks, OptionalControls, dispatch};
#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{PositionSource, TickerClock};
pub use session::PlaybackSession;
pub use types::{ClockTick, PlaybackCmd, PlaybackStatus, RepeatMode, Track};
