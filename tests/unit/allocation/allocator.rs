//! Tests for tile counting and seeded sequence allocation

#[cfg(test)]
mod tests {
    use image::GrayImage;
    use pixelmosaic::allocation::{WeightEntry, WeightTable, allocate, allocation_counts};
    use pixelmosaic::raster::TileLibrary;
    use pixelmosaic::{AllocationError, MosaicError};

    fn table(entries: &[(&str, f64)]) -> WeightTable {
        WeightTable::new(
            entries
                .iter()
                .map(|&(identifier, weight)| WeightEntry::new(identifier, weight))
                .collect(),
        )
        .unwrap()
    }

    fn library(identifiers: &[&str]) -> TileLibrary {
        identifiers
            .iter()
            .map(|&identifier| (identifier, GrayImage::new(1, 1)))
            .collect()
    }

    // Tests quarter/three-quarter split lands exactly on the budget
    // Verified by switching ceiling to floor plus one
    #[test]
    fn test_counts_match_exact_proportions() {
        let weights = table(&[("A", 0.25), ("B", 0.75)]);
        assert_eq!(allocation_counts(&weights, 100), vec![25, 75]);

        let sequence = allocate(&weights, &library(&["A", "B"]), 100, 7).unwrap();
        let counts = sequence.counts();
        assert_eq!(counts.get("A"), Some(&25));
        assert_eq!(counts.get("B"), Some(&75));
    }

    // Tests counts round up so coverage never falls short
    // Verified by replacing ceil with round
    #[test]
    fn test_counts_round_up() {
        let weights = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]);
        assert_eq!(allocation_counts(&weights, 10), vec![4, 4, 4]);
    }

    // Tests floating-point noise on an integer product adds no tile
    // Verified by removing the allocation tolerance
    #[test]
    fn test_counts_ignore_rounding_noise() {
        let weights = table(&[("A", 0.3), ("B", 0.7)]);
        assert_eq!(allocation_counts(&weights, 10), vec![3, 7]);
    }

    // Tests every count stays within one tile of its exact share
    // Verified by adding a constant to every count
    #[test]
    fn test_counts_within_one_tile() {
        let weights = table(&[("A", 3.0), ("B", 5.0), ("C", 11.0), ("D", 0.5)]);
        for budget in [0, 1, 7, 64, 333, 1000] {
            let counts = allocation_counts(&weights, budget);
            let total: usize = counts.iter().sum();
            assert!(total >= budget, "total {total} below budget {budget}");

            for ((_, proportion), count) in weights.proportions().into_iter().zip(counts) {
                let exact = proportion * budget as f64;
                assert!(count as f64 >= exact.floor());
                assert!((count as f64) < exact + 1.0);
            }
        }
    }

    // Tests identical inputs give identical sequences
    // Verified by seeding the generator from system entropy
    #[test]
    fn test_allocation_is_deterministic() {
        let weights = table(&[("goomba", 40.0), ("koopa", 12.0), ("coin", 90.0)]);
        let tiles = library(&["goomba", "koopa", "coin"]);

        let first = allocate(&weights, &tiles, 250, 12345).unwrap();
        let second = allocate(&weights, &tiles, 250, 12345).unwrap();
        assert_eq!(first.identifiers(), second.identifiers());
    }

    // Tests the seed changes the order but not the counts
    // Verified by ignoring the seed argument
    #[test]
    fn test_seed_changes_order_only() {
        let weights = table(&[("A", 1.0), ("B", 1.0)]);
        let tiles = library(&["A", "B"]);

        let first = allocate(&weights, &tiles, 200, 1).unwrap();
        let second = allocate(&weights, &tiles, 200, 2).unwrap();
        assert_ne!(first.identifiers(), second.identifiers());
        assert_eq!(first.counts(), second.counts());
    }

    // Tests the sequence is actually shuffled
    // Verified by removing the shuffle call
    #[test]
    fn test_sequence_is_shuffled() {
        let weights = table(&[("A", 1.0), ("B", 1.0)]);
        let sequence = allocate(&weights, &library(&["A", "B"]), 100, 99).unwrap();

        let first_half_a = sequence
            .identifiers()
            .iter()
            .take(50)
            .filter(|identifier| identifier.as_str() == "A")
            .count();
        assert!(first_half_a < 50, "first half is all 'A', sequence not shuffled");
    }

    // Tests surplus tiles are truncated to the budget
    // Verified by removing the truncate call
    #[test]
    fn test_sequence_truncated_to_budget() {
        let weights = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]);
        let tiles = library(&["A", "B", "C"]);

        for budget in [1, 2, 10, 101] {
            let sequence = allocate(&weights, &tiles, budget, 3).unwrap();
            assert_eq!(sequence.len(), budget);
            assert_eq!(sequence.remaining(), budget);
        }
    }

    // Tests a zero budget yields an empty sequence
    // Verified by forcing a minimum count of one
    #[test]
    fn test_zero_budget() {
        let weights = table(&[("A", 1.0)]);
        let sequence = allocate(&weights, &library(&["A"]), 0, 42).unwrap();
        assert!(sequence.is_empty());
    }

    // Tests identifiers missing from the library fail allocation
    // Verified by skipping library resolution
    #[test]
    fn test_unresolved_identifier() {
        let weights = table(&[("A", 1.0), ("missing", 2.0)]);
        let result = allocate(&weights, &library(&["A"]), 10, 42);

        match result {
            Err(MosaicError::Allocation(AllocationError::UnresolvedIdentifier { identifier })) => {
                assert_eq!(identifier, "missing");
            }
            other => unreachable!("Expected unresolved identifier error, got {other:?}"),
        }
    }
}
