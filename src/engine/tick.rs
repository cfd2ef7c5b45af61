//! Fixed-period sampling tick
//!
//! The tick channel fires continuously while attached, whether or not the
//! recorder is armed; idle ticks are dropped by the handler, not the source.

use crate::types::SAMPLE_INTERVAL;
use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// Cancellable fixed-period tick channel.
///
/// `attach`/`detach` are an explicit lifecycle pair: detaching drops the
/// receiver, which cancels the ticker, so neither teardown nor a
/// controller-driven resize can leak a timer. The channel holds at most one
/// pending tick; periods that elapse without being drained coalesce.
#[derive(Debug)]
pub struct TickSource {
    period: Duration,
    ticks: Option<Receiver<Instant>>,
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource {
    /// Create an attached tick source with the standard sample interval
    pub fn new() -> Self {
        Self::with_period(SAMPLE_INTERVAL)
    }

    /// Create an attached tick source with a custom period
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            ticks: Some(crossbeam_channel::tick(period)),
        }
    }

    /// The tick period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Check if the ticker is running
    pub fn is_attached(&self) -> bool {
        self.ticks.is_some()
    }

    /// Stop the ticker; pending ticks are discarded
    pub fn detach(&mut self) {
        self.ticks = None;
    }

    /// Restart the ticker; the first tick fires one full period from now
    pub fn attach(&mut self) {
        self.ticks = Some(crossbeam_channel::tick(self.period));
    }

    /// Drain pending ticks, returning how many fired since the last drain
    /// (at most one per period; missed periods coalesce)
    pub fn drain(&mut self) -> usize {
        match &self.ticks {
            Some(rx) => rx.try_iter().count(),
            None => 0,
        }
    }
}
