mod debug_assert_aligned;
pub use debug_assert_aligned::*;
