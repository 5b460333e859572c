//! Diagnostics setup
//!
//! Logs go to stderr so stdout stays clean for results and NDJSON.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,cardsmith=info",
        2 => "warn,cardsmith=debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` wins over `-v`
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .without_time()
        .try_init();
}
