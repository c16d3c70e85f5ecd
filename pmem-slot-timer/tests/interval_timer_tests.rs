#[cfg(test)]
mod tests {

    use std::time::Duration;

    use pmem_slot_timer::constants::MAX_TIMERS;
    use pmem_slot_timer::{CycleTimer, IntervalTimer, TimerError, read_cycle_counter, thread_timer};

    /// Route `"{label} took .. us"` lines through the test writer so they
    /// show up under `RUST_LOG=pmem_slot_timer=info`.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_start_stop_reports_non_negative_elapsed() {
        init_tracing();

        let mut timer = IntervalTimer::new();
        timer.start().expect("Failed to start interval");
        let elapsed = timer.stop("noop").expect("Failed to stop interval");
        assert!(elapsed >= Duration::ZERO);
        assert_eq!(timer.depth(), 0);
    }

    #[test]
    fn test_nested_intervals_pair_lifo() {
        init_tracing();

        let mut timer = IntervalTimer::new();

        timer.start().expect("Failed to start outer interval");
        std::thread::sleep(Duration::from_millis(2));
        timer.start().expect("Failed to start inner interval");
        std::thread::sleep(Duration::from_millis(2));

        let inner = timer.stop("inner").expect("Failed to stop inner interval");
        let outer = timer.stop("outer").expect("Failed to stop outer interval");

        // The innermost stop pairs with the most recent start, so the outer
        // interval must cover the inner one entirely.
        assert!(outer >= inner, "outer {outer:?} shorter than nested inner {inner:?}");
        assert!(inner >= Duration::from_millis(2));
        assert!(outer >= Duration::from_millis(4));
    }

    #[test]
    fn test_depth_limit_is_an_explicit_error() {
        let mut timer = IntervalTimer::new();
        for _ in 0..MAX_TIMERS {
            timer.start().expect("Failed to start interval within depth limit");
        }
        assert_eq!(timer.start(), Err(TimerError::DepthExceeded));
        assert_eq!(timer.depth(), MAX_TIMERS);

        // The stack must still unwind cleanly after the rejected start.
        for _ in 0..MAX_TIMERS {
            timer.elapsed().expect("Failed to unwind interval");
        }
        assert_eq!(timer.depth(), 0);
    }

    #[test]
    fn test_stop_without_start_is_an_explicit_error() {
        let mut timer = IntervalTimer::new();
        assert_eq!(timer.stop("orphan"), Err(TimerError::NoOutstandingInterval));
        assert_eq!(timer.elapsed(), Err(TimerError::NoOutstandingInterval));
    }

    #[test]
    fn test_thread_local_timers_are_independent() {
        thread_timer::start().expect("Failed to start on main thread");

        let handle = std::thread::spawn(|| {
            // A fresh thread sees an empty stack, not the main thread's
            // outstanding interval.
            assert_eq!(thread_timer::depth(), 0);
            assert_eq!(
                thread_timer::elapsed(),
                Err(TimerError::NoOutstandingInterval)
            );

            thread_timer::start().expect("Failed to start on worker thread");
            thread_timer::stop("worker").expect("Failed to stop on worker thread")
        });

        let worker_elapsed = handle.join().expect("worker thread panicked");
        assert!(worker_elapsed >= Duration::ZERO);

        // The worker's stop must not have consumed the main thread's interval.
        assert_eq!(thread_timer::depth(), 1);
        let main_elapsed = thread_timer::stop("main").expect("Failed to stop on main thread");
        assert!(main_elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_cycle_timer_round_trip() {
        let timer = CycleTimer::start();
        let first = timer.elapsed();
        let second = timer.stop("spin");
        // Counter deltas within one thread never run backwards.
        assert!(second >= first);
    }

    #[test]
    fn test_cycle_counter_advances_within_a_thread() {
        let a = read_cycle_counter();
        std::thread::sleep(Duration::from_millis(1));
        let b = read_cycle_counter();
        assert!(b > a, "cycle counter did not advance across a 1 ms sleep");
    }
}
