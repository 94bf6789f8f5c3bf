//! Tracing/logging initialization.
//!
//! Log output goes to stderr so it never interleaves with the console
//! conversation on stdout.

use tracing_subscriber::EnvFilter;

/// Level used when neither a flag nor `RUST_LOG` says otherwise
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize tracing for the process.
///
/// An explicit `level` wins over `RUST_LOG`. Safe to call multiple times
/// (subsequent calls are no-ops).
/// An unparsable `level` falls back to [`DEFAULT_LEVEL`] with a warning
/// on stderr.
pub fn init(level: Option<&str>) {
    let (filter, warning) = resolve_filter(level);
    if let Some(warning) = warning {
        eprintln!("{}", warning);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Pick the filter for `level`, plus a warning when it had to be replaced
fn resolve_filter(level: Option<&str>) -> (EnvFilter, Option<String>) {
    match level {
        Some(level) => match EnvFilter::try_new(level) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_LEVEL),
                Some(format!(
                    "warning: invalid log level '{}' ({}), using '{}'",
                    level, e, DEFAULT_LEVEL
                )),
            ),
        },
        None => (
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
            None,
        ),
    }
}
