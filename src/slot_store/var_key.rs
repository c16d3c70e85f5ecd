use thiserror::Error;

use crate::slot_store::constants::*;

/// Malformed or truncated variable-length key region.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VarKeyError {
    /// Fewer than [`VAR_KEY_HEADER_SIZE`] bytes available.
    #[error("variable-length key region too small for its header ({actual} bytes)")]
    TruncatedHeader { actual: usize },

    /// The header declares more key bytes than the region holds.
    #[error("variable-length key declares {declared} bytes but region holds {actual}")]
    TruncatedKey { declared: usize, actual: usize },
}

/// Owned, length-prefixed variable-length key record.
///
/// Used when the index's key domain is not fixed-width: the slot's `key`
/// field then refers into a region holding these records instead of
/// carrying an inline value (the indirection itself is the index's
/// business).
///
/// ## Record layout
///
/// This is a flexible-size record, not a fixed-size struct:
///
/// - **Offset `0` → `4`**: key byte count (little-endian `u32`)
/// - **Offset `4` → `4 + length`**: exactly `length` key bytes, inline
///
/// **Total size**: `VAR_KEY_HEADER_SIZE + length`, computed from the
/// requested length at construction time ([`VarKey::encoded_len`]). The
/// header is meaningless without its backing bytes and is never allocated
/// on its own. No null terminator is stored or implied; readers must never
/// look past `length` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarKey {
    buf: Vec<u8>,
}

impl VarKey {
    /// Encodes `key` as a length-prefixed record. The key may be empty;
    /// lengths beyond [`MAX_VAR_KEY_LEN`] are not representable in the
    /// header.
    pub fn new(key: &[u8]) -> Self {
        debug_assert!(key.len() <= MAX_VAR_KEY_LEN);

        let mut buf = Vec::with_capacity(Self::encoded_len(key.len()));
        buf.extend_from_slice(&(key.len() as u32).to_le_bytes());
        buf.extend_from_slice(key);

        Self { buf }
    }

    /// Total record size for a key of `key_len` bytes. Callers allocating
    /// records inside their own arena size the region with this.
    #[inline]
    pub const fn encoded_len(key_len: usize) -> usize {
        VAR_KEY_HEADER_SIZE + key_len
    }

    /// Declared key byte count.
    #[inline]
    pub fn key_len(&self) -> usize {
        self.buf.len() - VAR_KEY_HEADER_SIZE
    }

    /// The key bytes `[0, length)`.
    #[inline]
    pub fn key_bytes(&self) -> &[u8] {
        &self.buf[VAR_KEY_HEADER_SIZE..]
    }

    /// The full encoded record (header plus key bytes), e.g. for copying
    /// into caller-managed backing storage.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

/// Zero-copy read-only view of a length-prefixed key record inside
/// caller-managed storage.
///
/// `parse` accepts a region that may extend past the record (arenas hand
/// out whole suffixes) and narrows the view to exactly
/// `VAR_KEY_HEADER_SIZE + length` bytes, so the view can never read beyond
/// what the writer declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarKeyRef<'a> {
    bytes: &'a [u8],
}

impl<'a> VarKeyRef<'a> {
    pub fn parse(region: &'a [u8]) -> Result<Self, VarKeyError> {
        if region.len() < VAR_KEY_HEADER_SIZE {
            return Err(VarKeyError::TruncatedHeader {
                actual: region.len(),
            });
        }

        let declared = u32::from_le_bytes(region[VAR_KEY_LEN_RANGE].try_into().unwrap()) as usize;
        let total = VAR_KEY_HEADER_SIZE + declared;
        if region.len() < total {
            return Err(VarKeyError::TruncatedKey {
                declared,
                actual: region.len() - VAR_KEY_HEADER_SIZE,
            });
        }

        Ok(Self {
            bytes: &region[..total],
        })
    }

    /// Declared key byte count.
    #[inline]
    pub fn key_len(&self) -> usize {
        self.bytes.len() - VAR_KEY_HEADER_SIZE
    }

    /// The key bytes `[0, length)`.
    #[inline]
    pub fn key_bytes(&self) -> &'a [u8] {
        &self.bytes[VAR_KEY_HEADER_SIZE..]
    }

    /// Size of the record inside its backing storage, header included.
    #[inline]
    pub fn record_len(&self) -> usize {
        self.bytes.len()
    }
}
