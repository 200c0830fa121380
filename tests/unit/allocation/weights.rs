//! Tests for weight table validation and count aggregation

#[cfg(test)]
mod tests {
    use pixelmosaic::allocation::{WeightEntry, WeightTable};
    use pixelmosaic::{AllocationError, MosaicError};

    // Tests proportions are normalized by the total weight
    // Verified by dividing by entry count instead of total
    #[test]
    fn test_proportions_normalized() {
        let table = WeightTable::new(vec![
            WeightEntry::new("A", 1.0),
            WeightEntry::new("B", 3.0),
        ])
        .unwrap();

        let proportions = table.proportions();
        assert_eq!(proportions, vec![("A", 0.25), ("B", 0.75)]);
        assert!((table.total_weight() - 4.0).abs() < f64::EPSILON);
    }

    // Tests zero, negative and non-finite weights are excluded
    // Verified by keeping every entry
    #[test]
    fn test_non_positive_weights_dropped() {
        let table = WeightTable::new(vec![
            WeightEntry::new("zero", 0.0),
            WeightEntry::new("keep", 2.0),
            WeightEntry::new("negative", -1.0),
            WeightEntry::new("nan", f64::NAN),
            WeightEntry::new("infinite", f64::INFINITY),
        ])
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.entries().first().map(|e| e.identifier.as_str()), Some("keep"));
    }

    // Tests empty tables are rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_empty_table_rejected() {
        for entries in [vec![], vec![WeightEntry::new("A", 0.0)]] {
            let result = WeightTable::new(entries);
            assert!(matches!(
                result,
                Err(MosaicError::Allocation(AllocationError::EmptyWeightTable))
            ));
        }
    }

    // Tests duplicate identifiers are rejected
    // Verified by removing the uniqueness check
    #[test]
    fn test_duplicate_identifier_rejected() {
        let result = WeightTable::new(vec![
            WeightEntry::new("A", 1.0),
            WeightEntry::new("A", 2.0),
        ]);

        assert!(matches!(
            result,
            Err(MosaicError::Allocation(AllocationError::DuplicateIdentifier { ref identifier }))
                if identifier == "A"
        ));
    }

    // Tests raw counts are summed per identifier in first-seen order
    // Verified by keeping only the last count for repeated identifiers
    #[test]
    fn test_from_counts_aggregates() {
        let table = WeightTable::from_counts(vec![
            ("Goomba", 10),
            ("Coin", 5),
            ("Goomba", 30),
            ("Star", 0),
        ])
        .unwrap();

        let entries: Vec<_> = table
            .entries()
            .iter()
            .map(|e| (e.identifier.as_str(), e.weight))
            .collect();
        assert_eq!(entries, vec![("Goomba", 40.0), ("Coin", 5.0)]);
    }
}
