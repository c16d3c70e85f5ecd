//! Cache-line-aligned slot records for persistent-memory key-value indexes.
//!
//! This crate supplies the storage unit a persistent-memory hash index
//! builds its tables over: a fixed-layout [`Slot`] record with reserved
//! sentinel encodings, a 64-byte-aligned backing arena ([`SlotArena`]), and
//! a length-prefixed variable-length key record ([`VarKey`]).
//!
//! The index itself (bucket placement, probing, splitting, persistence
//! ordering) lives elsewhere; everything here is the byte-level layout and
//! alignment contract that index relies on. Persistent-memory write-back
//! and flush instructions operate on whole cache lines, so a slot array
//! that straddled line boundaries unpredictably would make a flush of one
//! slot touch or miss its neighbors. [`SlotArena`] guarantees that never
//! happens.

pub mod slot_store;
pub use slot_store::{
    ArenaError, Slot, SlotArena, VarKey, VarKeyError, VarKeyRef, slot_array_layout,
};

pub mod utils;
