//! Thread-local interval timing.
//!
//! Free functions over one [`IntervalTimer`] per thread, so concurrent
//! threads can each time their own operations without sharing a stack.
//! Safe across threads exactly because no thread can reach another's
//! intervals; within a thread the usual LIFO pairing applies.

use std::cell::RefCell;
use std::time::Duration;

use crate::{IntervalTimer, TimerError};

thread_local! {
    static TIMER: RefCell<IntervalTimer> = RefCell::new(IntervalTimer::new());
}

/// Opens an interval on the calling thread's timer stack.
pub fn start() -> Result<(), TimerError> {
    TIMER.with(|t| t.borrow_mut().start())
}

/// Closes the calling thread's innermost interval and reports it.
pub fn stop(label: &str) -> Result<Duration, TimerError> {
    TIMER.with(|t| t.borrow_mut().stop(label))
}

/// Closes the calling thread's innermost interval without reporting.
pub fn elapsed() -> Result<Duration, TimerError> {
    TIMER.with(|t| t.borrow_mut().elapsed())
}

/// Outstanding intervals on the calling thread.
pub fn depth() -> usize {
    TIMER.with(|t| t.borrow().depth())
}
