//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and supports subcommands for
//! extensibility.

mod amend;
mod normalize;
mod pre_commit;

pub use amend::{AmendArgs, run_amend};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
pub use normalize::{NormalizeArgs, run_normalize};
pub use pre_commit::{PreCommitArgs, run_pre_commit};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Normalize the copyright year ranges of some files in place
  yearstamp src/main.c src/util.c

  # Normalize and extend the year ranges with the current year
  yearstamp --year 2025 src/*.c

  # Preserve fixed-width header framing while normalizing
  yearstamp --policy pad --year 2025 include/frame.h

  # Leave third-party headers alone
  yearstamp --ignore \"VMware\" --ignore \"MSFT\" vendor/glue.c

  # Run as a git pre-commit hook (configured via `git config copyright.*`)
  yearstamp pre-commit

  # Extend the headers of the files changed by HEAD with the commit's year
  yearstamp amend
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub normalize_args: NormalizeArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Normalize copyright year ranges in the given files (default)
  Normalize(NormalizeArgs),

  /// Run as a git pre-commit hook, reconciling staged and unstaged content
  #[command(name = "pre-commit")]
  PreCommit(PreCommitArgs),

  /// Extend the copyright years of the files changed by the HEAD commit
  /// with that commit's year
  Amend(AmendArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
