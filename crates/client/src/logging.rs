//! Tracing subscriber setup.
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber so decision output on stdout stays clean.
///
/// `RUST_LOG` refines the filter; `verbose` raises the default from INFO to
/// DEBUG, which prints the candidate ranking for every tick.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
