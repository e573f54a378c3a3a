//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use randopanel::io::progress::ProgressManager;

    // Tests ProgressManager construction
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();

        assert!(!pm.is_visible());
        assert_eq!(pm.panel_count(), 0);
        assert_eq!(pm.completed(), 0);
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();

        assert!(!pm.is_visible());
        assert_eq!(pm.panel_count(), 0);
    }

    // Tests single panel runs are tracked on the hidden bar
    // Verified by skipping progress updates on hidden bars
    #[test]
    fn test_single_panel_tracking() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.complete_panel(7);
        pm.finish();

        assert_eq!(pm.panel_count(), 1);
        assert_eq!(pm.completed(), 1);
    }

    // Tests every completed panel advances a batch bar
    // Verified by incrementing by the seed instead of one
    #[test]
    fn test_batch_tracking() {
        let mut pm = ProgressManager::new();
        pm.initialize(4);

        for seed in 100..104 {
            pm.complete_panel(seed);
        }
        pm.finish();

        assert_eq!(pm.panel_count(), 4);
        assert_eq!(pm.completed(), 4);
    }
}
