//! # Normalize Command
//!
//! This module implements the batch normalization command. This is the
//! default command when no subcommand is specified.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;

use crate::logging::init_tracing;
use crate::normalize::{Normalizer, Policy, normalize_files};

/// Arguments for the normalize command
#[derive(Args, Debug, Default)]
pub struct NormalizeArgs {
  /// Files whose copyright year ranges should be normalized in place
  #[arg(required = false, value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Rewrite policy: plain text replacement, or pad to preserve
  /// fixed-width header framing
  #[arg(long, value_enum, default_value_t = Policy::Plain)]
  pub policy: Policy,

  /// Extend every year range with this year; when absent, existing years
  /// are only normalized and merged
  #[arg(long, value_name = "YEAR")]
  pub year: Option<i32>,

  /// Skip header occurrences whose matched text contains this pattern
  /// (repeatable, substring match)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,
}

/// Run the normalize command with the given arguments
pub fn run_normalize(args: NormalizeArgs) -> Result<()> {
  if args.files.is_empty() {
    eprintln!("ERROR: Missing required argument: <FILES>...");
    process::exit(1);
  }

  init_tracing(args.quiet, args.verbose);

  let normalizer = Normalizer::new(args.policy, args.year).with_ignore_patterns(args.ignore);
  normalize_files(&args.files, &normalizer)
}
