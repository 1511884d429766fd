//! # Amend Command
//!
//! This module implements post-hoc fixing of a commit that went through
//! without its copyright years being adjusted: it extends the headers of
//! all files changed by the HEAD commit with that commit's year. The
//! rewrite only touches the working tree; reviewing the result and folding
//! it into the commit via `git commit --amend` is left to the user.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, TimeZone};
use clap::Args;

use crate::git;
use crate::logging::init_tracing;
use crate::normalize::{Normalizer, Policy, normalize_files};

/// Arguments for the amend command
#[derive(Args, Debug, Default)]
pub struct AmendArgs {
  /// Rewrite policy: plain text replacement, or pad to preserve
  /// fixed-width header framing
  #[arg(long, value_enum, default_value_t = Policy::Padded)]
  pub policy: Policy,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

/// Run the amend command with the given arguments
pub fn run_amend(args: AmendArgs) -> Result<()> {
  init_tracing(false, args.verbose);

  let repo = git::open_repository()?;
  let workdir = repo
    .workdir()
    .with_context(|| "Repository has no working tree")?
    .to_path_buf();

  let files: Vec<_> = git::committed_files(&repo)?
    .into_iter()
    .map(|path| workdir.join(path))
    .collect();

  let seconds = git::head_commit_time(&repo)?;
  let year = Local
    .timestamp_opt(seconds, 0)
    .single()
    .with_context(|| "Failed to interpret the HEAD commit time")?
    .year();

  let normalizer = Normalizer::new(args.policy, Some(year));
  normalize_files(&files, &normalizer)
}
