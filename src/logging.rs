use tracing::Level;

/// Installs the global tracing subscriber. Diagnostics go to stderr;
/// stdout carries only the check's console lines.
pub fn setup_logger(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
