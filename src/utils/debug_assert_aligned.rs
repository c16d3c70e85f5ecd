/// Debug-only pointer alignment assertion that is safe to export.
///
/// The symbol is always present and only its body is cfg-gated, so callers
/// (including other crates) can invoke it unconditionally without their own
/// cfg fences. In debug/test it asserts; in release it compiles to a true
/// no-op with the arguments kept "used".
#[inline]
pub fn debug_assert_aligned(ptr: *const u8, align: usize) {
    #[cfg(any(test, debug_assertions))]
    {
        debug_assert!(align.is_power_of_two());
        debug_assert!(
            (ptr as usize & (align - 1)) == 0,
            "buffer base is not {}-byte aligned",
            align
        );
    }

    #[cfg(not(any(test, debug_assertions)))]
    {
        // Release: no-op. Keep args used to avoid warnings.
        let _ = ptr;
        let _ = align;
    }
}

/// Debug-only slot-offset alignment assertion.
///
/// Asserts that a byte offset into a slot arena lands on a cache-line
/// boundary, i.e. the *derived start offset* of a flush unit. Use the
/// pointer variant to assert the actual address handed to flush/write-back
/// primitives.
#[inline]
pub fn debug_assert_aligned_offset(off: usize) {
    #[cfg(any(test, debug_assertions))]
    {
        use crate::slot_store::constants::SLOT_ALIGNMENT;

        debug_assert!(
            SLOT_ALIGNMENT.is_power_of_two(),
            "SLOT_ALIGNMENT must be a power of two"
        );
        debug_assert!(
            off.is_multiple_of(SLOT_ALIGNMENT),
            "derived flush offset not {}-byte aligned (got {})",
            SLOT_ALIGNMENT,
            off
        );
    }

    #[cfg(not(any(test, debug_assertions)))]
    {
        // Release: no-op. Keep arg used to avoid warnings.
        let _ = off;
    }
}
