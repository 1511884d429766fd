//! # Pre-Commit Command
//!
//! This module implements the git pre-commit hook entry point. The hook
//! normalizes the copyright years of all to-be-committed files, keeping
//! staged and unstaged content reconciled.

use std::process;

use anyhow::Result;
use chrono::Datelike;
use clap::Args;

use crate::logging::init_tracing;
use crate::{git, hook};

/// Arguments for the pre-commit command
#[derive(Args, Debug, Default)]
pub struct PreCommitArgs {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

/// Run the pre-commit hook with the given arguments
///
/// Failures terminate the process with a nonzero status so that git
/// aborts the commit.
pub fn run_pre_commit(args: PreCommitArgs) -> Result<()> {
  init_tracing(false, args.verbose);

  let repo = git::open_repository()?;
  // Copyright annotations of committed files are extended with the
  // commit's year.
  let year = chrono::Local::now().year();

  if let Err(e) = hook::run(&repo, year) {
    eprintln!("ERROR: {e:#}");
    process::exit(1);
  }

  Ok(())
}
