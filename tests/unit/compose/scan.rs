//! Tests for the fixed scan order and precomputed sequence positions

#[cfg(test)]
mod tests {
    use ndarray::array;
    use pixelmosaic::compose::scan::{ScanCell, ScanPlan, scan_order};
    use pixelmosaic::raster::Mask;

    // Tests coordinates run along each row before moving down
    // Verified by swapping the loop nesting
    #[test]
    fn test_scan_order_is_row_major() {
        let order: Vec<_> = scan_order(3, 2).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    // Tests only foreground pixels get consecutive sequence positions
    // Verified by numbering background pixels too
    #[test]
    fn test_plan_numbers_foreground_only() {
        let mask = Mask::from_opacity(array![[0, 255, 0], [40, 0, 7]]).unwrap();
        let plan = ScanPlan::from_mask(&mask);

        assert_eq!(plan.len(), 3);
        assert_eq!(
            plan.cells(),
            &[
                ScanCell {
                    x: 1,
                    y: 0,
                    opacity: 255,
                    sequence_index: 0
                },
                ScanCell {
                    x: 0,
                    y: 1,
                    opacity: 40,
                    sequence_index: 1
                },
                ScanCell {
                    x: 2,
                    y: 1,
                    opacity: 7,
                    sequence_index: 2
                },
            ]
        );
    }

    // Tests an all-background mask produces an empty plan
    // Verified by treating zero opacity as foreground
    #[test]
    fn test_empty_plan() {
        let mask = Mask::from_opacity(array![[0, 0], [0, 0]]).unwrap();
        assert!(ScanPlan::from_mask(&mask).is_empty());
    }
}
