//! enumgen CLI entry point

fn main() {
    // Structured logging with env-based filter, defaulting to warn (debug with --debug)
    let default_level = if std::env::args().any(|a| a == "--debug") {
        "debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();

    enumgen::cli::run();
}
