//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Builds the log filter.
///
/// - `quiet`: always off
/// - `verbose`: `RUST_LOG` if set, otherwise `info`
/// - default: `warn`, so skipped words are still visible
#[must_use]
pub fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    }
}

/// Installs the global subscriber, writing to stderr so reports on stdout
/// stay clean.
pub fn init_tracing(verbose: bool, quiet: bool) {
    let ansi = std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, quiet))
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
