//! # Logging Module
//!
//! Structured logging setup for the yearstamp tool. Diagnostics go to
//! stderr so that normal output stays pipeline-friendly; verbosity is
//! driven by the `-v`/`-q` flags with `RUST_LOG` taking precedence when
//! set.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// The verbosity count maps to warn/info/debug/trace; quiet mode restricts
/// output to errors. Re-initialization (as happens across in-process test
/// invocations) is ignored.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let level = if quiet {
    "error"
  } else {
    match verbose {
      0 => "warn",
      1 => "info",
      2 => "debug",
      _ => "trace",
    }
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .try_init();
}
