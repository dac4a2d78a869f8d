use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber.
///
/// `RUST_LOG` wins over the config file's `[logging] filter`; `--quiet`
/// overrides both.
pub(crate) fn init(config_filter: Option<&str>, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_filter.unwrap_or(DEFAULT_FILTER)))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
