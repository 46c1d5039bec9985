//! Position sources for the playback session.
//!
//! The session never advances time by itself; it asks a `PositionSource` to
//! start or stop emitting `ClockTick`s and applies whatever ticks arrive.
//! `TickerClock` is the synthetic one-second ticker. A real media-position
//! reporter would implement the same trait.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use super::types::ClockTick;

/// Something that can be armed to produce ticks for a given generation and
/// disarmed again.
pub trait PositionSource {
    /// Start emitting ticks tagged with `generation`. Any previous arming must
    /// be cancelled first.
    fn arm(&mut self, generation: u64);
    /// Stop emitting ticks. Idempotent.
    fn disarm(&mut self);
}

/// Synthetic clock: a background thread per arming that sends one
/// `ClockTick` every `interval` until cancelled.
pub struct TickerClock {
    tx: Sender<ClockTick>,
    interval: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl TickerClock {
    pub fn new(tx: Sender<ClockTick>, interval: Duration) -> Self {
        Self {
            tx,
            interval,
            cancel: None,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.cancel.is_some()
    }
}

impl PositionSource for TickerClock {
    fn arm(&mut self, generation: u64) {
        self.disarm();

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_for_thread = cancel.clone();
        let tx = self.tx.clone();
        let interval = self.interval;

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if cancel_for_thread.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(ClockTick { generation }).is_err() {
                    // Receiver gone: the session was dropped.
                    break;
                }
            }
        });

        tracing::trace!(generation, "clock armed");
        self.cancel = Some(cancel);
    }

    fn disarm(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.store(true, Ordering::Release);
            tracing::trace!("clock disarmed");
        }
    }
}

impl Drop for TickerClock {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Test double that records arming instead of spawning threads.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    /// Generation currently armed, if any.
    pub armed: Option<u64>,
    /// Every generation ever armed, in order.
    pub arms: Vec<u64>,
    /// Number of disarm calls that actually cancelled something.
    pub disarms: usize,
}

#[cfg(test)]
impl PositionSource for ManualClock {
    fn arm(&mut self, generation: u64) {
        self.disarm();
        self.armed = Some(generation);
        self.arms.push(generation);
    }

    fn disarm(&mut self) {
        if self.armed.take().is_some() {
            self.disarms += 1;
        }
    }
}
