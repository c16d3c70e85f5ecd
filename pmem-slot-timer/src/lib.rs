//! Interval measurement around persistent-memory index operations.
//!
//! Purely observational: every timer here produces numbers and `tracing`
//! events, never data the index consumes. Two timing domains:
//!
//! - [`IntervalTimer`]: wall-clock microseconds, nested start/stop pairs on
//!   a bounded LIFO stack (and a [`thread_timer`] thread-local variant).
//! - [`CycleTimer`]: CPU cycle counts for very short, thread-confined
//!   sections.
//!
//! Timer state is caller-owned (or thread-local), never process-wide, and
//! misuse — starting past the depth limit, stopping with nothing running —
//! is an explicit [`TimerError`] instead of undefined behavior.

pub mod constants;

mod interval_timer;
pub use interval_timer::{IntervalTimer, TimerError};

mod cycle_timer;
pub use cycle_timer::{CycleTimer, read_cycle_counter};

pub mod thread_timer;
