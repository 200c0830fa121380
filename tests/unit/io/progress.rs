//! Tests for progress tracking across single and batched runs

#[cfg(test)]
mod tests {
    use pixelmosaic::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use pixelmosaic::io::progress::ProgressManager;
    use std::path::Path;

    // Tests small batches track each file before it starts
    // Verified by recording state only for started files
    #[test]
    fn test_small_batch_tracks_started_files() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        assert_eq!(manager.file_progress(0), None);

        manager.start_file(2, Path::new("sprites/luigi.png"));

        assert_eq!(manager.file_progress(0), Some((0, 0)));
        assert_eq!(manager.file_progress(2), Some((0, 0)));
        manager.finish();
    }

    // Tests large batches keep state for files beyond the visible bars
    // Verified by dropping files that scroll out of the rolling window
    #[test]
    fn test_large_batch_keeps_every_file() {
        let mut manager = ProgressManager::default();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 10;
        manager.initialize(file_count);

        for index in 0..file_count {
            manager.start_file(index, Path::new("sprites/boo.gif"));
            manager.update_tiles(index, 3, 7);
            manager.complete_file(index);
        }

        assert_eq!(manager.file_progress(0), Some((7, 7)));
        assert_eq!(manager.file_progress(file_count - 1), Some((7, 7)));
        manager.finish();
    }

    // Tests tile counts are tracked and completion fills the bar
    // Verified by leaving placed tiles unchanged on completion
    #[test]
    fn test_tile_progress_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        manager.start_file(1, Path::new("sprites/yoshi.png"));
        assert_eq!(manager.file_progress(1), Some((0, 0)));

        manager.update_tiles(1, 40, 100);
        assert_eq!(manager.file_progress(1), Some((40, 100)));

        manager.complete_file(1);
        assert_eq!(manager.file_progress(1), Some((100, 100)));
        assert_eq!(manager.file_progress(5), None);
        manager.finish();
    }
}
