use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::constants::MAX_TIMERS;

/// Timer stack misuse, surfaced explicitly instead of reading or writing
/// out of bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer stack depth exceeded ({MAX_TIMERS} outstanding intervals)")]
    DepthExceeded,

    #[error("no outstanding interval to stop")]
    NoOutstandingInterval,
}

/// Nested wall-clock interval timer with microsecond reporting.
///
/// A bounded LIFO stack of start timestamps: each `stop` pairs with the
/// most recent `start`. At most [`MAX_TIMERS`] intervals may be outstanding
/// at once.
///
/// The stack is an explicit, caller-owned object; it carries no
/// synchronization and is meant to be confined to one thread (or wrapped in
/// [`thread_timer`](crate::thread_timer) for per-thread use).
///
/// ```
/// use pmem_slot_timer::IntervalTimer;
///
/// let mut timer = IntervalTimer::new();
/// timer.start()?;
/// // ... the operation being measured ...
/// let elapsed = timer.stop("bucket_insert")?;
/// assert!(elapsed.as_nanos() > 0 || elapsed.is_zero());
/// # Ok::<(), pmem_slot_timer::TimerError>(())
/// ```
#[derive(Debug, Default)]
pub struct IntervalTimer {
    starts: Vec<Instant>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self {
            starts: Vec::with_capacity(MAX_TIMERS),
        }
    }

    /// Opens a new interval nested inside any already running ones.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.starts.len() == MAX_TIMERS {
            return Err(TimerError::DepthExceeded);
        }
        self.starts.push(Instant::now());
        Ok(())
    }

    /// Closes the innermost interval, reports
    /// `"{label} took {:.2} us"` to the diagnostic stream, and returns the
    /// elapsed time.
    pub fn stop(&mut self, label: &str) -> Result<Duration, TimerError> {
        let elapsed = self.elapsed()?;
        info!(
            target: "pmem_slot_timer",
            "{} took {:.2} us",
            label,
            elapsed.as_secs_f64() * 1_000_000.0
        );
        Ok(elapsed)
    }

    /// Closes the innermost interval without reporting.
    pub fn elapsed(&mut self) -> Result<Duration, TimerError> {
        let start = self
            .starts
            .pop()
            .ok_or(TimerError::NoOutstandingInterval)?;
        Ok(start.elapsed())
    }

    /// Number of currently outstanding intervals.
    #[inline]
    pub fn depth(&self) -> usize {
        self.starts.len()
    }
}
