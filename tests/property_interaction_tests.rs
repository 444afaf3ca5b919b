use growth_chart::core::x_of;
use growth_chart::interaction::nearest_index;
use proptest::prelude::*;

proptest! {
    #[test]
    fn nearest_index_stays_within_sequence(
        pointer_x in -5_000.0f64..5_000.0,
        width in 1.0f64..4_000.0,
        count in 1usize..500,
    ) {
        let index = nearest_index(pointer_x, width, count).expect("non-empty sequence");
        prop_assert!(index < count);
    }

    #[test]
    fn nearest_index_is_monotonic_in_pointer(
        a in -5_000.0f64..5_000.0,
        b in -5_000.0f64..5_000.0,
        width in 1.0f64..4_000.0,
        count in 1usize..500,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_index = nearest_index(low, width, count).expect("index");
        let high_index = nearest_index(high, width, count).expect("index");
        prop_assert!(low_index <= high_index);
    }

    #[test]
    fn nearest_index_is_stable(
        pointer_x in -5_000.0f64..5_000.0,
        width in 1.0f64..4_000.0,
        count in 0usize..500,
    ) {
        prop_assert_eq!(
            nearest_index(pointer_x, width, count),
            nearest_index(pointer_x, width, count)
        );
    }

    #[test]
    fn pointer_inside_a_slot_selects_that_slot(
        width in 1.0f64..4_000.0,
        count in 2usize..500,
        slot_seed in any::<usize>(),
    ) {
        let slot = slot_seed % (count - 1);
        let step = width / (count - 1) as f64;
        let pointer_x = x_of(slot, count, width) + step * 0.5;
        prop_assert_eq!(nearest_index(pointer_x, width, count), Some(slot));
        prop_assert_eq!(nearest_index(width * 2.0, width, count), Some(count - 1));
    }
}
