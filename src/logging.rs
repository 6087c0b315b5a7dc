//! Tracing setup for the command line tool
//!
//! Diagnostics go to stderr so reports on stdout stay machine-readable.
//! `MODGRAPH_LOG` takes standard `EnvFilter` directives and overrides the
//! level picked from `--verbose`/`--quiet`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "MODGRAPH_LOG";

static INIT: Once = Once::new();

/// Default level for the given verbosity flags
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "warn",
    }
}

/// Initialize the global subscriber. Only the first call has any effect.
pub fn init_tracing(verbose: bool, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

        // A subscriber installed by an embedding program wins
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
