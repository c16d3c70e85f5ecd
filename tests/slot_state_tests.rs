#[cfg(test)]
mod tests {

    use pmem_slot::{Slot, SlotArena};
    use pmem_slot::slot_store::constants::{KEY_EMPTY, KEY_TOMBSTONE, SLOT_SIZE, VALUE_NONE};

    #[test]
    fn test_default_slot_is_empty() {
        let slot = Slot::default();
        assert_eq!(slot.key, KEY_EMPTY, "default slot must carry the empty sentinel");
        assert_eq!(slot.value, VALUE_NONE, "default slot value must be explicitly zeroed");
        assert!(slot.is_empty());
        assert!(!slot.is_tombstone());
        assert!(!slot.is_live());
    }

    #[test]
    fn test_constructed_slot_reads_back_exactly() {
        let slot = Slot::new(42, 7);
        assert_eq!(slot.key, 42);
        assert_eq!(slot.value, 7);
        assert!(slot.is_live());

        // Boundary keys just below the reserved band are legal.
        let high = Slot::new(KEY_TOMBSTONE - 1, u32::MAX);
        assert_eq!(high.key, KEY_TOMBSTONE - 1);
        assert_eq!(high.value, u32::MAX);
        assert!(high.is_live());
    }

    #[test]
    fn test_sentinels_pairwise_distinct() {
        assert_ne!(KEY_EMPTY, KEY_TOMBSTONE);

        // Representative application key/value domain never collides with
        // the reserved encodings.
        for key in [0u64, 1, 42, 1 << 32, KEY_TOMBSTONE - 1] {
            assert!(!Slot::is_reserved_key(key), "application key {key} treated as reserved");
        }
        assert!(Slot::is_reserved_key(KEY_EMPTY));
        assert!(Slot::is_reserved_key(KEY_TOMBSTONE));

        // VALUE_NONE is distinct from representative live payloads.
        for value in [1u32, 7, u32::MAX] {
            assert_ne!(value, VALUE_NONE);
        }
    }

    #[test]
    fn test_slot_is_plain_16_byte_value() {
        assert_eq!(std::mem::size_of::<Slot>(), 16);
        assert_eq!(SLOT_SIZE, 16);

        // Whole-record copy semantics, no side effects.
        let a = Slot::new(3, 9);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn test_mark_deleted_transitions_to_tombstone() {
        let mut slot = Slot::new(42, 7);
        slot.mark_deleted();
        assert!(slot.is_tombstone());
        assert!(!slot.is_empty(), "tombstone must stay distinct from never-used");
        assert!(!slot.is_live());
    }

    #[test]
    fn test_insert_then_delete_scenario_over_1024_slots() {
        let mut arena = SlotArena::new(1024).expect("Failed to allocate arena");

        for slot in arena.iter() {
            assert!(slot.is_empty(), "freshly allocated table must be all-empty");
        }

        arena[10] = Slot::new(42, 7);

        assert_eq!(arena[10].key, 42);
        assert_eq!(arena[10].value, 7);
        for (i, slot) in arena.iter().enumerate() {
            if i != 10 {
                assert!(slot.is_empty(), "slot {i} disturbed by unrelated insert");
            }
        }

        arena[10].mark_deleted();
        assert!(!arena[10].is_live());
        assert!(!arena[10].is_empty());
        assert!(arena[10].is_tombstone());
    }
}
