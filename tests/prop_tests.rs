use growbuf::{Global, GrowBuf, NoHooks};
use proptest::prelude::*;

fn buf_from(items: &[u8]) -> GrowBuf<u8> {
    let mut alloc = Global;
    let mut hooks = NoHooks;
    let mut buf = GrowBuf::with_capacity(items.len().max(1), &mut alloc, &mut hooks);
    buf.insert_after(0, items, &mut alloc, &mut hooks).unwrap();
    buf
}

proptest! {
    // Reversing twice restores the original sequence.
    #[test]
    fn prop_reverse_is_an_involution(items in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut alloc = Global;
        let mut buf = buf_from(&items);

        buf.reverse();
        buf.reverse();

        prop_assert_eq!(buf.as_slice(), &items[..]);
        buf.destroy(&mut alloc);
    }

    // The stable partition keeps survivors in their original relative order
    // and removes exactly the occurrence count of each doomed item.
    #[test]
    fn prop_remove_each_instance_is_a_stable_filter(
        items in prop::collection::vec(0u8..5, 0..64),
        doomed in prop::collection::hash_set(0u8..5, 0..3),
    ) {
        let mut alloc = Global;
        let doomed: Vec<u8> = doomed.into_iter().collect();
        let mut buf = buf_from(&items);

        let occurrences: usize = doomed.iter().map(|d| buf.count_of(&[*d])).sum();
        let capacity_before = buf.capacity();

        buf.remove_each_instance(&doomed);

        let expected: Vec<u8> = items
            .iter()
            .copied()
            .filter(|item| !doomed.contains(item))
            .collect();
        prop_assert_eq!(buf.as_slice(), &expected[..]);
        prop_assert_eq!(buf.len(), items.len() - occurrences);
        prop_assert_eq!(buf.capacity(), capacity_before);
        buf.destroy(&mut alloc);
    }

    // Inserting a block and removing the same window round-trips.
    #[test]
    fn prop_insert_then_remove_round_trips(
        items in prop::collection::vec(any::<u8>(), 1..32),
        block in prop::collection::vec(any::<u8>(), 1..8),
        index_seed in any::<usize>(),
    ) {
        let mut alloc = Global;
        let mut hooks = NoHooks;
        let index = index_seed % items.len();
        let mut buf = buf_from(&items);

        buf.insert_after(index, &block, &mut alloc, &mut hooks).unwrap();
        prop_assert_eq!(buf.len(), items.len() + block.len());
        buf.remove_range(index + 1, block.len() - 1, &mut hooks).unwrap();

        prop_assert_eq!(buf.as_slice(), &items[..]);
        buf.destroy(&mut alloc);
    }

    // A duplicate is element-wise equal behind a distinct region.
    #[test]
    fn prop_duplicate_matches_source(items in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut alloc = Global;
        let mut hooks = NoHooks;
        let mut buf = buf_from(&items);

        let mut copy = buf.duplicate(&mut alloc, &mut hooks);

        prop_assert_eq!(&buf, &copy);
        prop_assert_ne!(buf.as_slice().as_ptr(), copy.as_slice().as_ptr());
        copy.destroy(&mut alloc);
        buf.destroy(&mut alloc);
    }

    // Search agrees with an oracle over the same data.
    #[test]
    fn prop_first_index_of_matches_oracle(
        items in prop::collection::vec(0u8..4, 0..32),
        needle in prop::collection::vec(0u8..4, 1..4),
    ) {
        let mut alloc = Global;
        let buf = buf_from(&items);

        let oracle = items
            .windows(needle.len())
            .position(|window| window == needle.as_slice());
        let expected = if needle.len() > items.len() { None } else { oracle };

        prop_assert_eq!(buf.first_index_of(&needle), expected);
        let mut buf = buf;
        buf.destroy(&mut alloc);
    }
}
