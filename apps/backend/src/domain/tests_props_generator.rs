use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::{Card, Cell, COLUMN_SPAN, GRID_SIZE};
use super::generator::{generate_card, generate_unique_set};

proptest! {
    #[test]
    fn every_seed_yields_a_constraint_satisfying_card(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let card = generate_card(&mut rng);

        for c in 0..GRID_SIZE {
            let start = Card::column_range_start(c);
            let column = card.column(c);

            let numbers: HashSet<u8> = column
                .iter()
                .filter_map(|cell| match cell {
                    Cell::Number(n) => Some(*n),
                    Cell::Free => None,
                })
                .collect();

            // Distinctness: the set is as large as the slot count.
            let expected = if c == 2 { GRID_SIZE - 1 } else { GRID_SIZE };
            prop_assert_eq!(numbers.len(), expected);

            for n in &numbers {
                prop_assert!((start..start + COLUMN_SPAN).contains(n));
            }
        }

        prop_assert_eq!(card.cell(2, 2), Cell::Free);
        // Exactly one FREE on the whole card.
        prop_assert_eq!(card.cells().filter(|c| *c == Cell::Free).count(), 1);
    }

    #[test]
    fn unique_sets_fill_for_small_counts(seed in any::<u64>(), count in 1usize..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = generate_unique_set(&mut rng, count).unwrap();

        prop_assert_eq!(cards.len(), count);
        let distinct: HashSet<&Card> = cards.iter().collect();
        prop_assert_eq!(distinct.len(), count);
    }

    #[test]
    fn serde_roundtrips_any_generated_card(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let card = generate_card(&mut rng);

        let raw = card.to_store_string().unwrap();
        let back = Card::from_store_str(&raw).unwrap();
        prop_assert_eq!(back, card);
    }
}
