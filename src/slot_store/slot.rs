use crate::slot_store::constants::*;

/// Fixed-layout key/value record, the atomic unit of storage in a
/// persistent-memory hash index.
///
/// ## Memory layout
///
/// - `#[repr(C)]` for a predictable layout suitable for direct persistence.
/// - 16 bytes total (`u64` key, `u32` value, 4 bytes tail padding), so four
///   slots pack exactly into one 64-byte cache line.
/// - No type-level alignment attribute: the 64-byte contract belongs to the
///   array allocation (see [`SlotArena`](crate::slot_store::SlotArena)),
///   not to individual records.
///
/// ## States
///
/// - `key == KEY_EMPTY`: never written. The default-constructed state.
/// - `key == KEY_TOMBSTONE`: logically deleted, preserving probe-sequence
///   correctness in open-addressed tables.
/// - any other key: live entry. `value == VALUE_NONE` then means "no
///   payload".
///
/// A `Slot` owns nothing and is safe to copy or overwrite as a plain value.
/// It carries no synchronization; atomic update ordering is the consuming
/// index's protocol.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub key: Key,
    pub value: ValueId,
}

impl Default for Slot {
    /// An unused slot. The value field is explicitly zeroed rather than left
    /// as a don't-care pattern, since scanners may read it speculatively
    /// before checking the key.
    #[inline]
    fn default() -> Self {
        Self {
            key: KEY_EMPTY,
            value: VALUE_NONE,
        }
    }
}

impl Slot {
    /// Builds a live slot. No validation on the hot path; passing a reserved
    /// key is a caller contract violation, caught in debug builds only.
    #[inline]
    pub fn new(key: Key, value: ValueId) -> Self {
        debug_assert!(
            !Self::is_reserved_key(key),
            "reserved sentinel {key:#x} used as a live key"
        );
        Self { key, value }
    }

    /// True for the two key encodings an application key must never take.
    #[inline]
    pub fn is_reserved_key(key: Key) -> bool {
        key == KEY_EMPTY || key == KEY_TOMBSTONE
    }

    /// Never written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key == KEY_EMPTY
    }

    /// Logically deleted.
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.key == KEY_TOMBSTONE
    }

    /// Holds a live entry (neither empty nor deleted).
    #[inline]
    pub fn is_live(&self) -> bool {
        !Self::is_reserved_key(self.key)
    }

    /// Marks the slot deleted in place. The stale value is left behind; a
    /// tombstone is never a lookup hit, so overwriting it would be wasted
    /// write traffic on the persistence path.
    #[inline]
    pub fn mark_deleted(&mut self) {
        self.key = KEY_TOMBSTONE;
    }
}
