/// Maximum number of outstanding nested intervals per timer stack.
pub const MAX_TIMERS: usize = 10;
