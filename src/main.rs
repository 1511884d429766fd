//! # yearstamp
//!
//! A tool that normalizes copyright year ranges in source file headers.

use anyhow::Result;
use yearstamp::cli::{Cli, Command, run_amend, run_normalize, run_pre_commit};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  match cli.command {
    Some(Command::PreCommit(args)) => run_pre_commit(args),
    Some(Command::Amend(args)) => run_amend(args),
    Some(Command::Normalize(args)) => run_normalize(args),
    None => run_normalize(cli.normalize_args),
  }
}
