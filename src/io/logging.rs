//! Logging initialization

/// Filter used when `RUST_LOG` is not set
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the logging system
///
/// Uses `env_logger` with a default filter of `warn`, or `debug` when
/// `verbose` is set. Override with the `RUST_LOG` environment variable.
/// Returns `false` if a logger was already installed.
pub fn init(verbose: bool) -> bool {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbose)),
    )
    .try_init()
    .is_ok()
}
