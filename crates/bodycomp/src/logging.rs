//! Log filter setup for the tracing subscriber.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Filter from `RUST_LOG`, falling back to WARN (DEBUG with `--verbose`)
/// when the variable is unset or names no directives.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level(verbose)).into())
        .from_env_lossy()
}

/// Filter from an explicit directive string, with the same fallback as
/// [`env_filter`].
#[must_use]
pub fn filter_from(directives: &str, verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level(verbose)).into())
        .parse_lossy(directives)
}
