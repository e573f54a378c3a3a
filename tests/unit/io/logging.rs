//! Tests for logger initialization

#[cfg(test)]
mod tests {
    use randopanel::io::logging::{default_filter, init};

    // Tests the verbose flag raises the default level
    // Verified by swapping the two filters
    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    // Tests a second initialization reports the existing logger
    // Verified by ignoring the try_init result
    #[test]
    fn test_init_only_once() {
        // Another test may have installed the logger first
        let _ = init(false);
        assert!(!init(true));
        log::debug!("logger installed");
    }
}
