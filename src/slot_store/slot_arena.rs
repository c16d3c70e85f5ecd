use std::alloc::{Layout, alloc, dealloc};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use thiserror::Error;
use tracing::trace;

use crate::slot_store::Slot;
use crate::slot_store::constants::{SLOT_ALIGNMENT, SLOT_SIZE};
use crate::utils::debug_assert_aligned;

/// Failure modes of the aligned arena contract.
///
/// Alignment is load-bearing for the consuming index, so every failure is
/// surfaced explicitly; there is no silent fallback to misaligned or null
/// storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// An index table has at least one slot; a zero-length backing array is
    /// a caller bug, not an allocatable object.
    #[error("slot arena length must be at least 1")]
    ZeroLength,

    /// `len * SLOT_SIZE` overflowed the address space.
    #[error("slot array layout overflows for {len} slots")]
    LayoutOverflow { len: usize },

    /// The allocator returned null for an aligned request.
    #[error("aligned allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },
}

/// Computes the layout of a contiguous `len`-slot array aligned to
/// [`SLOT_ALIGNMENT`].
///
/// Exposed on its own so the alignment contract stays a visible, testable
/// API rather than a side effect buried in allocation.
pub fn slot_array_layout(len: usize) -> Result<Layout, ArenaError> {
    if len == 0 {
        return Err(ArenaError::ZeroLength);
    }
    Layout::array::<Slot>(len)
        .and_then(|layout| layout.align_to(SLOT_ALIGNMENT))
        .map_err(|_| ArenaError::LayoutOverflow { len })
}

/// Owned, cache-line-aligned backing array of [`Slot`]s.
///
/// One contiguous allocation whose base address is always a multiple of 64,
/// so a cache-line flush of any slot covers a predictable, non-overlapping
/// set of neighbors. Every slot starts out in the empty state; the arena is
/// never handed out uninitialized.
///
/// The arena dereferences to `[Slot]` for in-place mutation. Slots are never
/// deallocated individually; the whole array is freed as a unit on drop.
pub struct SlotArena {
    ptr: NonNull<Slot>,
    len: usize,
}

// Slots are plain data and the arena is the sole owner of the allocation.
unsafe impl Send for SlotArena {}
unsafe impl Sync for SlotArena {}

impl SlotArena {
    /// Allocates `len` slots at a 64-byte boundary, all empty.
    ///
    /// Allocator exhaustion is reported as [`ArenaError::AllocationFailed`];
    /// proceeding with null or misaligned storage would violate the
    /// persistence contract the index relies on.
    pub fn new(len: usize) -> Result<Self, ArenaError> {
        let layout = slot_array_layout(len)?;

        // SAFETY: `layout` has non-zero size (len >= 1) and a power-of-two
        // alignment from `slot_array_layout`.
        let raw = unsafe { alloc(layout) };
        let Some(base) = NonNull::new(raw as *mut Slot) else {
            return Err(ArenaError::AllocationFailed {
                bytes: layout.size(),
            });
        };
        debug_assert_aligned(raw as *const u8, SLOT_ALIGNMENT);

        // SAFETY: `base` points to `len` uninitialized slots inside the
        // allocation we just made.
        unsafe {
            for i in 0..len {
                base.as_ptr().add(i).write(Slot::default());
            }
        }

        trace!(
            "allocated slot arena: {} slots, {} bytes, base {:p}",
            len,
            len * SLOT_SIZE,
            raw
        );

        Ok(Self { ptr: base, len })
    }

    /// Number of slots in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base pointer of the backing array, always a multiple of 64. This is
    /// the address the index hands to flush/write-back primitives.
    #[inline]
    pub fn as_ptr(&self) -> *const Slot {
        self.ptr.as_ptr()
    }
}

impl Deref for SlotArena {
    type Target = [Slot];

    #[inline]
    fn deref(&self) -> &[Slot] {
        // SAFETY: `ptr` covers exactly `len` initialized slots for the
        // lifetime of the arena.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for SlotArena {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Slot] {
        // SAFETY: as above, plus `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for SlotArena {
    fn drop(&mut self) {
        // Recomputing the layout cannot fail: `new` already proved it.
        if let Ok(layout) = slot_array_layout(self.len) {
            trace!("freeing slot arena: {} slots", self.len);
            // SAFETY: `ptr` came from `alloc` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl std::fmt::Debug for SlotArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotArena")
            .field("len", &self.len)
            .field("base", &self.ptr)
            .finish()
    }
}
