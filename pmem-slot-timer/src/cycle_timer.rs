use tracing::info;

/// Reads the CPU cycle counter.
///
/// - x86_64: `rdtsc`.
/// - aarch64: the virtual counter register `cntvct_el0` (a constant-rate
///   counter, not core cycles, but the closest portable equivalent).
/// - elsewhere: monotonic nanoseconds since first use, so deltas stay
///   meaningful even without a hardware counter.
///
/// Raw readings are only comparable within one thread; cross-socket or
/// cross-thread deltas are not meaningful.
#[inline]
pub fn read_cycle_counter() -> u64 {
    #[cfg(target_arch = "x86_64")]
    // SAFETY: `rdtsc` has no memory or register preconditions.
    unsafe {
        return core::arch::x86_64::_rdtsc();
    }

    #[cfg(target_arch = "aarch64")]
    // SAFETY: reading `cntvct_el0` is side-effect free and permitted from
    // user space.
    unsafe {
        let counter: u64;
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) counter, options(nomem, nostack));
        return counter;
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

/// Cycle-accurate start/stop pair for very short, thread-confined sections.
///
/// A plain value the measuring thread owns: `start` captures the counter,
/// `stop` consumes the timer, so a pair cannot be reused before it is
/// stopped. Each thread keeps its own `CycleTimer`s; there is no shared
/// state to serialize.
///
/// ```
/// use pmem_slot_timer::CycleTimer;
///
/// let timer = CycleTimer::start();
/// // ... a handful of instructions ...
/// let _cycles = timer.stop("probe_sequence");
/// ```
#[derive(Debug)]
pub struct CycleTimer {
    start: u64,
}

impl CycleTimer {
    /// Captures the current counter reading.
    #[inline]
    pub fn start() -> Self {
        Self {
            start: read_cycle_counter(),
        }
    }

    /// Cycles elapsed so far, without consuming the timer.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        read_cycle_counter().wrapping_sub(self.start)
    }

    /// Consumes the timer, reports `"{label} took {} cycles"` to the
    /// diagnostic stream, and returns the cycle delta.
    pub fn stop(self, label: &str) -> u64 {
        let cycles = self.elapsed();
        info!(target: "pmem_slot_timer", "{} took {} cycles", label, cycles);
        cycles
    }
}
