use std::ops::Range;

/// Application key type. Wide enough to hold any inline key or one of the
/// two reserved sentinel encodings.
pub type Key = u64;

/// Fixed-width value identifier (an object/record handle), deliberately
/// narrower than the key.
pub type ValueId = u32;

/// Key encoding of a never-written slot. This is the default-construction
/// state, so bulk default-initializing a backing array yields a well-defined
/// empty table.
pub const KEY_EMPTY: Key = Key::MAX;

/// Key encoding of a logically deleted slot. Distinct from [`KEY_EMPTY`] so
/// open-addressed probe sequences can tell "keep probing" from "stop".
pub const KEY_TOMBSTONE: Key = Key::MAX - 1;

/// Value identifier meaning "no payload". A slot carrying this is not a
/// lookup hit unless the consuming index explicitly allows null-valued
/// entries.
pub const VALUE_NONE: ValueId = 0;

/// Fixed alignment (power of two) for every slot array allocation.
/// 64 bytes matches cache-line size, the unit persistent-memory flush and
/// write-back instructions act on. Arrays are aligned as a whole; individual
/// slots pack four to a line.
pub const SLOT_ALIGN_LOG2: u8 = 6; // 2^6 = 64
pub const SLOT_ALIGNMENT: usize = 1 << SLOT_ALIGN_LOG2;

/// Size of one slot record (`u64` key + `u32` value, padded to 16).
pub const SLOT_SIZE: usize = std::mem::size_of::<crate::slot_store::Slot>();

// Variable-length key record layout: a little-endian u32 byte count
// immediately followed by exactly that many key bytes.
pub const VAR_KEY_HEADER_SIZE: usize = 4;
pub const VAR_KEY_LEN_RANGE: Range<usize> = 0..4;

/// Largest representable key length (header is a `u32`).
pub const MAX_VAR_KEY_LEN: usize = u32::MAX as usize;
