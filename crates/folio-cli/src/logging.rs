// Rust guideline compliant 2026-10-14

//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Directive used when `--verbose` is passed.
pub const VERBOSE_FILTER: &str = "folio=debug";

/// Directive used when neither `--verbose` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the event filter.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honored and
/// falls back to warnings only.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to stderr.
///
/// Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
