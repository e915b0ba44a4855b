use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "lumina={level},lumina_kernel={level},lumina_inspire={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
