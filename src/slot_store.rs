pub mod constants;

mod slot;
pub use slot::Slot;

mod slot_arena;
pub use slot_arena::{ArenaError, SlotArena, slot_array_layout};

mod var_key;
pub use var_key::{VarKey, VarKeyError, VarKeyRef};
